//! Dependency-ordered insertion
//!
//! Derives the order in which entity kinds must be inserted from the
//! dependency table declared on [`EntityKind::depends_on`], instead of a
//! hand-maintained sequence. Ties are broken by declaration order, so the
//! result is deterministic:
//!
//! `Customer → CustomerDetail → Product → Order → OrderLine → SalesAgent → Courier → Shipment`

use crate::errors::OrderingError;
use crate::model::EntityKind;

/// Insert order for every declared entity kind
pub fn insert_order() -> Result<Vec<EntityKind>, OrderingError> {
    topological_order(&EntityKind::ALL, EntityKind::depends_on)
}

/// Stable topological sort of `kinds` under `depends_on`
///
/// At every step the first not-yet-placed kind (in slice order) whose
/// dependencies are all placed is emitted next.
pub fn topological_order<'a, F>(
    kinds: &[EntityKind],
    depends_on: F,
) -> Result<Vec<EntityKind>, OrderingError>
where
    F: Fn(EntityKind) -> &'a [EntityKind],
{
    for &kind in kinds {
        if let Some(&missing) = depends_on(kind).iter().find(|d| !kinds.contains(d)) {
            return Err(OrderingError::UndeclaredDependency {
                entity: kind,
                dependency: missing,
            });
        }
    }

    let mut placed: Vec<EntityKind> = Vec::with_capacity(kinds.len());
    while placed.len() < kinds.len() {
        let next = kinds.iter().copied().find(|kind| {
            !placed.contains(kind) && depends_on(*kind).iter().all(|d| placed.contains(d))
        });

        match next {
            Some(kind) => placed.push(kind),
            None => {
                let remaining = kinds
                    .iter()
                    .copied()
                    .filter(|k| !placed.contains(k))
                    .collect();
                return Err(OrderingError::Cycle { remaining });
            }
        }
    }

    Ok(placed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_insert_order_matches_foreign_key_sequence() {
        assert_eq!(
            insert_order().unwrap(),
            vec![
                EntityKind::Customer,
                EntityKind::CustomerDetail,
                EntityKind::Product,
                EntityKind::Order,
                EntityKind::OrderLine,
                EntityKind::SalesAgent,
                EntityKind::Courier,
                EntityKind::Shipment,
            ]
        );
    }

    #[test]
    fn test_cycle_is_reported() {
        let cyclic = |kind: EntityKind| -> &'static [EntityKind] {
            match kind {
                EntityKind::Order => &[EntityKind::OrderLine],
                EntityKind::OrderLine => &[EntityKind::Order],
                _ => &[],
            }
        };
        let kinds = [EntityKind::Customer, EntityKind::Order, EntityKind::OrderLine];

        let err = topological_order(&kinds, cyclic).unwrap_err();
        assert_eq!(
            err,
            OrderingError::Cycle {
                remaining: vec![EntityKind::Order, EntityKind::OrderLine]
            }
        );
    }

    #[test]
    fn test_undeclared_dependency_is_reported() {
        let kinds = [EntityKind::Order];
        let err = topological_order(&kinds, EntityKind::depends_on).unwrap_err();
        assert_eq!(
            err,
            OrderingError::UndeclaredDependency {
                entity: EntityKind::Order,
                dependency: EntityKind::Customer,
            }
        );
    }

    proptest! {
        #[test]
        fn prop_any_declaration_order_respects_dependencies(
            kinds in Just(EntityKind::ALL.to_vec()).prop_shuffle()
        ) {
            let order = topological_order(&kinds, EntityKind::depends_on).unwrap();
            prop_assert_eq!(order.len(), kinds.len());
            for (pos, kind) in order.iter().enumerate() {
                for dep in kind.depends_on() {
                    let dep_pos = order.iter().position(|k| k == dep).unwrap();
                    prop_assert!(dep_pos < pos, "{} placed before its dependency {}", kind, dep);
                }
            }
        }
    }
}
