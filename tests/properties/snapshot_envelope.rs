//! Property tests for the deployment envelope around snapshots.

use proptest::prelude::*;
use serde_json::{json, Value};

use victor::infrastructure::pulumi::envelope::{unwrap, wrap};
use victor::Snapshot;

fn deployment() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[ -~]{0,16}".prop_map(Value::from),
        Just(Value::Null),
    ];
    let tree = leaf.prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            proptest::collection::btree_map("[a-z]{1,8}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    });
    proptest::collection::vec(tree, 0..4).prop_map(|resources| {
        json!({ "manifest": { "version": "v3.130.0" }, "resources": resources })
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Wrapping for import and unwrapping from export carries the text through unchanged.
    #[test]
    fn property_envelope_preserves_deployment_text(
        doc in deployment(),
        pretty in any::<bool>(),
    ) {
        let text = if pretty {
            serde_json::to_string_pretty(&doc).unwrap()
        } else {
            serde_json::to_string(&doc).unwrap()
        };
        let snapshot = Snapshot::from_bytes(text.clone());

        let wrapped = String::from_utf8(wrap(&snapshot).unwrap()).unwrap();
        let back = unwrap(&wrapped).unwrap();

        prop_assert_eq!(back.as_bytes(), text.as_bytes());
        prop_assert_eq!(back.digest(), snapshot.digest());
    }

    /// PROPERTY: Any deployment version other than 3 is rejected.
    #[test]
    fn property_unknown_versions_are_rejected(
        version in any::<u64>().prop_filter("not 3", |v| *v != 3),
    ) {
        let exported = format!(r#"{{"version":{},"deployment":{{"resources":[]}}}}"#, version);
        prop_assert!(unwrap(&exported).is_err());
    }
}
