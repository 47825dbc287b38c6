use crate::{DealContext, RiskAssessmentParameters, RiskIdentifier, RiskItem};

fn identify(text: &str, params: &RiskAssessmentParameters) -> Vec<RiskItem> {
    RiskIdentifier::new().identify(text, &DealContext::default(), params)
}

fn repeated(phrase: &str, times: usize) -> String {
    vec![phrase; times].join(". ")
}

#[test]
fn one_item_per_category_with_hits() {
    let text = "Legal compliance is essential. Financial exposure may occur.";
    let params = RiskAssessmentParameters::with_categories(["Legal_Compliance", "Financial_Exposure"]);
    insta::assert_debug_snapshot!(identify(text, &params), @r###"
    [
        RiskItem {
            category: "Legal_Compliance",
            severity: 1,
            likelihood: 1,
        },
        RiskItem {
            category: "Financial_Exposure",
            severity: 1,
            likelihood: 1,
        },
    ]
    "###);
}

#[test]
fn default_categories_skip_zero_hits() {
    let text = "Any operational disruption at the plant must be reported.";
    let risks = identify(text, &RiskAssessmentParameters::default());
    assert_eq!(
        risks,
        vec![RiskItem {
            category: "Operational_Disruption".to_string(),
            severity: 1,
            likelihood: 1,
        }]
    );
}

#[test]
fn ratings_follow_hit_counts() {
    let params = RiskAssessmentParameters::with_categories(["Legal_Compliance"]);

    let three = identify(&repeated("legal compliance", 3), &params);
    assert_eq!((three[0].severity, three[0].likelihood), (3, 2));

    let seven = identify(&repeated("LEGAL COMPLIANCE", 7), &params);
    assert_eq!((seven[0].severity, seven[0].likelihood), (5, 4));

    let ten = identify(&repeated("Legal Compliance", 10), &params);
    assert_eq!((ten[0].severity, ten[0].likelihood), (5, 5));
}

#[test]
fn custom_scales_cap_ratings() {
    let params = RiskAssessmentParameters {
        risk_categories_to_scan: vec!["Financial_Exposure".to_string()],
        severity_scale_max: 2,
        likelihood_scale_max: 1,
    };
    let risks = identify(&repeated("financial exposure", 6), &params);
    assert_eq!((risks[0].severity, risks[0].likelihood), (2, 1));
}

#[test]
fn unvalidated_zero_scale_still_rates_one() {
    let params = RiskAssessmentParameters {
        risk_categories_to_scan: vec!["Legal_Compliance".to_string()],
        severity_scale_max: 0,
        likelihood_scale_max: 0,
    };
    let risks = identify("legal compliance", &params);
    assert_eq!((risks[0].severity, risks[0].likelihood), (1, 1));
}

#[test]
fn scan_order_follows_category_list() {
    let text = "Legal compliance and financial exposure.";
    let params = RiskAssessmentParameters::with_categories(["Financial_Exposure", "Legal_Compliance"]);
    let categories: Vec<_> = identify(text, &params)
        .into_iter()
        .map(|item| item.category)
        .collect();
    assert_eq!(categories, vec!["Financial_Exposure", "Legal_Compliance"]);
}

#[test]
fn category_phrase_is_literal_text() {
    let params = RiskAssessmentParameters::with_categories(["Price_(Adjustment)", "Earn.Out"]);
    let risks = identify("The price (adjustment) mechanism and the earn-out.", &params);
    assert_eq!(risks.len(), 1);
    assert_eq!(risks[0].category, "Price_(Adjustment)");
}

#[test]
fn spacing_must_match_exactly() {
    let params = RiskAssessmentParameters::with_categories(["Legal_Compliance"]);
    assert!(identify("legal  compliance", &params).is_empty());
    assert!(identify("legal_compliance", &params).is_empty());
}

#[test]
fn no_categories_no_risks() {
    let params = RiskAssessmentParameters::with_categories(Vec::<String>::new());
    assert!(identify("legal compliance", &params).is_empty());
}
