use bank_ledger::prelude::*;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Create,
    Deposit(u32, i64),
    Withdraw(u32, i64),
    Transfer(u32, u32, i64),
}

// Ids run past the seeded accounts so NotFound paths get exercised too
fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Create),
        (1u32..6, -50_000i64..50_000_000).prop_map(|(id, raw)| Op::Deposit(id, raw)),
        (1u32..6, -50_000i64..80_000_000).prop_map(|(id, raw)| Op::Withdraw(id, raw)),
        (1u32..6, 1u32..6, -50_000i64..80_000_000)
            .prop_map(|(from, to, raw)| Op::Transfer(from, to, raw)),
    ]
}

fn total(accounts: &[Account<FixedPoint>]) -> i64 {
    accounts.iter().map(|a| a.balance().raw()).sum()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        ..ProptestConfig::default()
    })]

    /// Balances never go negative and money only enters or leaves through
    /// deposits and withdrawals.
    #[test]
    fn balances_stay_non_negative_and_money_is_conserved(
        ops in prop::collection::vec(op_strategy(), 1..40)
    ) {
        tokio_test::block_on(async {
            let store = LedgerStore::<FixedPoint, _>::open(InMemoryBackend::new())
                .await
                .unwrap();
            let mut expected = total(&store.list_accounts().await.unwrap());

            for op in ops {
                match op {
                    Op::Create => {
                        store.create_account("Prop").await.unwrap();
                    }
                    Op::Deposit(id, raw) => {
                        if store.deposit(id, Some(FixedPoint::from_raw(raw))).await.is_ok() {
                            expected += raw;
                        }
                    }
                    Op::Withdraw(id, raw) => {
                        if store.withdraw(id, Some(FixedPoint::from_raw(raw))).await.is_ok() {
                            expected -= raw;
                        }
                    }
                    Op::Transfer(from, to, raw) => {
                        let _ = store.transfer(from, to, Some(FixedPoint::from_raw(raw))).await;
                    }
                }

                let accounts = store.list_accounts().await.unwrap();
                prop_assert!(accounts.iter().all(|a| a.balance() >= FixedPoint::default()));
                prop_assert_eq!(total(&accounts), expected);
            }
            Ok(())
        })?;
    }

    /// A failed operation never rewrites the stored document.
    #[test]
    fn failed_operations_leave_document_unchanged(
        id in 1u32..6,
        raw in -1_000_000i64..1
    ) {
        tokio_test::block_on(async {
            let store = LedgerStore::<FixedPoint, _>::open(InMemoryBackend::new())
                .await
                .unwrap();
            let before = store.backend().document().await;
            let saves = store.backend().save_count();

            prop_assert!(store.deposit(id, Some(FixedPoint::from_raw(raw))).await.is_err());
            prop_assert!(store.withdraw(id, Some(FixedPoint::from_raw(raw))).await.is_err());
            prop_assert!(store.transfer(id, 1, Some(FixedPoint::from_raw(raw))).await.is_err());

            prop_assert_eq!(store.backend().document().await, before);
            prop_assert_eq!(store.backend().save_count(), saves);
            Ok(())
        })?;
    }

    /// Depositing then withdrawing the same amount restores the balance.
    #[test]
    fn deposit_then_withdraw_round_trips_balance(
        id in 1u32..3,
        raw in 1i64..100_000_000
    ) {
        tokio_test::block_on(async {
            let store = LedgerStore::<FixedPoint, _>::open(InMemoryBackend::new())
                .await
                .unwrap();
            let before = store.get_account(id).await.unwrap();
            let amount = FixedPoint::from_raw(raw);

            store.deposit(id, Some(amount)).await.unwrap();
            let after = store.withdraw(id, Some(amount)).await.unwrap();

            prop_assert_eq!(after.balance(), before.balance());
            prop_assert_eq!(after.transactions().len(), before.transactions().len() + 2);
            Ok(())
        })?;
    }
}
