//! Property-based tests for readiness precedence invariants.

use mo_config::{BuilderState, WorkloadBuilder};
use proptest::prelude::*;

/// Which fragments have been supplied so far.
#[derive(Debug, Clone)]
struct Fragments {
    db_present: [bool; 4],
    env: Option<String>,
    ingress_ready: bool,
}

fn env_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("prod".to_string()),
        Just("stg".to_string()),
        Just("local".to_string()),
    ]
}

fn fragments_strategy() -> impl Strategy<Value = Fragments> {
    (
        prop::array::uniform4(any::<bool>()),
        prop::option::of(env_strategy()),
        any::<bool>(),
    )
        .prop_map(|(db_present, env, ingress_ready)| Fragments {
            db_present,
            env,
            ingress_ready,
        })
}

/// Fragments conditioned on the full readiness conjunction, generated
/// directly rather than assume-filtered so the property gets its full case
/// count.
fn ready_strategy() -> impl Strategy<Value = Fragments> {
    env_strategy().prop_map(|env| Fragments {
        db_present: [true; 4],
        env: Some(env),
        ingress_ready: true,
    })
}

/// Apply fragments to a fresh builder. The database quadruple is set only
/// when all four fields are present, matching how relation data arrives
/// (one fetch carries all four or nothing).
fn apply(fragments: &Fragments) -> WorkloadBuilder {
    let mut builder = WorkloadBuilder::new("metrics", "desktop", 8080);
    if fragments.db_present.iter().all(|present| *present) {
        builder.set_database("10.0.0.5", 5432, "user", "pw");
    }
    if let Some(env) = &fragments.env {
        builder.set_env(env);
    }
    builder.set_ingress_ready(fragments.ingress_ready);
    builder
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2_000))]

    /// Any missing database field dominates every other signal.
    #[test]
    fn missing_database_always_wins(fragments in fragments_strategy()) {
        prop_assume!(!fragments.db_present.iter().all(|present| *present));
        let builder = apply(&fragments);
        prop_assert_eq!(builder.state(), BuilderState::DatabaseNotReady);
    }

    /// With the database satisfied, env strictly precedes ingress.
    #[test]
    fn env_precedes_ingress(ingress_ready in any::<bool>()) {
        let fragments = Fragments {
            db_present: [true; 4],
            env: None,
            ingress_ready,
        };
        let builder = apply(&fragments);
        prop_assert_eq!(builder.state(), BuilderState::EnvNotSet);
    }

    /// With database and env satisfied, only the ingress flag decides.
    #[test]
    fn ingress_is_the_last_gate((env, ingress_ready) in (env_strategy(), any::<bool>())) {
        let fragments = Fragments {
            db_present: [true; 4],
            env: Some(env),
            ingress_ready,
        };
        let builder = apply(&fragments);
        let expected = if fragments.ingress_ready {
            BuilderState::Ready
        } else {
            BuilderState::IngressNotReady
        };
        prop_assert_eq!(builder.state(), expected);
    }

    /// Ready exactly at the full conjunction.
    #[test]
    fn ready_iff_full_conjunction(fragments in fragments_strategy()) {
        let builder = apply(&fragments);
        let expect_ready = fragments.db_present.iter().all(|present| *present)
            && fragments.env.is_some()
            && fragments.ingress_ready;
        prop_assert_eq!(builder.state() == BuilderState::Ready, expect_ready);
    }

    /// Ready builders always build, and the result carries the builder's fields.
    #[test]
    fn ready_builders_always_build(fragments in ready_strategy()) {
        let builder = apply(&fragments);
        prop_assert_eq!(builder.state(), BuilderState::Ready);
        let workload = builder.build();
        prop_assert!(workload.is_ok());
        let workload = workload.unwrap();
        prop_assert_eq!(workload.db_host.as_str(), "10.0.0.5");
        prop_assert_eq!(workload.db_port, 5432);
    }

    /// Non-ready builders never hand out a workload, whatever the blocking
    /// reason — including a store where only the ingress flag is unmet.
    #[test]
    fn non_ready_builders_never_build(fragments in fragments_strategy()) {
        let builder = apply(&fragments);
        prop_assume!(builder.state() != BuilderState::Ready);
        prop_assert!(builder.build().is_err());
    }
}
