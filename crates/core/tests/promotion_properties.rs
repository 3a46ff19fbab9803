//! Property tests for promotion line validation.

use backoffice::prelude::*;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn rule_input() -> impl Strategy<Value = RuleInput> {
    prop_oneof![
        (1_u64..10_000).prop_map(|id| RuleInput::product(id.to_string())),
        prop::collection::vec("[A-Z][a-z]{2,8}", 1..4).prop_map(|names| RuleInput::category(names)),
        (0_i64..100_000).prop_map(|cents| RuleInput::cart_value(Decimal::new(cents, 2).to_string())),
    ]
}

fn action_input() -> impl Strategy<Value = ActionInput> {
    prop_oneof![
        (0_i64..100_000).prop_map(|cents| ActionInput::fixed_off(Decimal::new(cents, 2).to_string())),
        (1_i64..10_000).prop_map(|cents| ActionInput::percent_off(Decimal::new(cents, 2).to_string())),
        (1_u64..10_000, 1_u32..10)
            .prop_map(|(id, quantity)| ActionInput::free_item(id.to_string(), quantity.to_string())),
    ]
}

proptest! {
    #[test]
    fn percentage_is_accepted_only_strictly_between_bounds(cents in -5_000_i64..15_000) {
        let percentage = Decimal::new(cents, 2);
        let result = PairRegistry::new()
            .validate(&RuleInput::product("1"), &ActionInput::percent_off(percentage.to_string()));

        let in_range = percentage > Decimal::ZERO && percentage < Decimal::ONE_HUNDRED;

        prop_assert_eq!(result.is_ok(), in_range);
    }

    #[test]
    fn category_order_does_not_change_the_condition(
        (names, shuffled) in prop::collection::vec("[A-Z][a-z]{2,8}", 1..5)
            .prop_flat_map(|names| (Just(names.clone()), Just(names).prop_shuffle()))
    ) {
        let mut registry = PairRegistry::new();

        prop_assert!(registry
            .try_add(&RuleInput::category(names), &ActionInput::fixed_off("1"))
            .is_ok());

        let result = registry.try_add(&RuleInput::category(shuffled), &ActionInput::percent_off("5"));

        prop_assert!(matches!(result, Err(Rejection::DuplicateCondition(_))));
        prop_assert_eq!(registry.len(), 1);
    }

    #[test]
    fn repeated_condition_is_rejected_for_any_action(
        rule in rule_input(),
        first in action_input(),
        second in action_input(),
    ) {
        let mut registry = PairRegistry::new();

        if registry.try_add(&rule, &first).is_ok() {
            let result = registry.try_add(&rule, &second);

            prop_assert!(matches!(result, Err(Rejection::DuplicateCondition(_))));
            prop_assert_eq!(registry.len(), 1);
        }
    }

    #[test]
    fn removed_line_can_be_added_again(rule in rule_input(), action in action_input()) {
        let mut registry = PairRegistry::new();

        if let Ok(index) = registry.try_add(&rule, &action) {
            let Some(removed) = registry.remove(index) else {
                return Err(TestCaseError::fail("line missing after add"));
            };

            prop_assert!(registry.is_empty());

            let (rule, action) = removed.to_inputs();

            prop_assert!(registry.try_add(&rule, &action).is_ok());
            prop_assert_eq!(registry.get(0), Some(&removed));
        }
    }

    #[test]
    fn only_category_with_free_item_is_incompatible(rule in rule_input(), action in action_input()) {
        let result = PairRegistry::new().validate(&rule, &action);

        let incompatible = rule.rule_type == Some(RuleType::Category)
            && action.action_type == Some(ActionType::FreeItem);

        if incompatible {
            prop_assert_eq!(result, Err(Rejection::CategoryFreeItem));
        } else {
            prop_assert!(result.is_ok(), "{:?}", result);
        }
    }

    #[test]
    fn category_with_free_item_is_never_accepted(
        categories in prop::collection::vec("[A-Za-z ]{0,8}", 0..3),
        product_id in "[0-9a-z ]{0,4}",
        quantity in "[0-9 -]{0,3}",
    ) {
        let action = ActionInput::free_item(product_id, quantity);

        let result = PairRegistry::new().validate(&RuleInput::category(categories), &action);

        prop_assert!(result.is_err());
    }
}
