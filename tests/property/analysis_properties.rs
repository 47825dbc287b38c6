use mna_quant::{
    AgreementAnalysis, ClosureProbabilityPredictor, DealContext, DealFinancials, DealStructure,
    EvaluationProfile, MarketContext, PredictionModelConfig, RiskAssessmentParameters,
    RiskIdentifier, StructureComplianceAnalyzer,
};
use proptest::prelude::*;

fn clause() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("MAC".to_string()),
        Just("Non-Compete".to_string()),
        Just("Section 2.1(a)".to_string()),
        "[a-zA-Z .()*+?]{1,12}",
    ]
}

fn agreement_text() -> impl Strategy<Value = String> {
    let line = prop_oneof![
        "[0-9]{1,2}\\. [a-zA-Z ]{0,20}",
        "(Section|SECTION|section) [0-9]{1,2}[a-zA-Z ]{0,10}",
        "[a-zA-Z ,]{0,30}(may|might|could|should)?[a-zA-Z ]{0,10}[.!?]{0,2}",
        "[a-zA-Z .()\\-]{0,30}",
    ];
    prop::collection::vec(line, 0..12).prop_map(|lines| lines.join("\n"))
}

fn is_header(line: &str) -> bool {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 && line[digits..].starts_with('.') {
        return true;
    }
    let lower = line.to_lowercase();
    match lower.strip_prefix("section") {
        Some(rest) => {
            let trimmed = rest.trim_start();
            trimmed.len() < rest.len() && trimmed.starts_with(|c: char| c.is_ascii_digit())
        }
        None => false,
    }
}

fn analyze(text: &str, checklist: &[String]) -> mna_quant::ComplianceResult {
    StructureComplianceAnalyzer::new().analyze(
        text,
        &DealContext::default(),
        &EvaluationProfile::with_checklist(checklist.iter().cloned()),
    )
}

proptest! {
    #[test]
    fn missing_clauses_are_exactly_the_absent_checklist_entries(
        text in agreement_text(),
        checklist in prop::collection::vec(clause(), 0..6),
    ) {
        let result = analyze(&text, &checklist);
        let lower = text.to_lowercase();
        let expected: Vec<String> = checklist
            .iter()
            .filter(|c| !lower.contains(&c.to_lowercase()))
            .cloned()
            .collect();
        prop_assert_eq!(result.missing_clauses, expected);
    }

    #[test]
    fn section_count_matches_header_lines(text in agreement_text()) {
        let result = analyze(&text, &[]);
        let expected = text.split('\n').filter(|line| is_header(line)).count();
        prop_assert_eq!(result.section_count, expected);
    }

    #[test]
    fn ambiguity_is_non_negative(text in agreement_text()) {
        prop_assert!(analyze(&text, &[]).ambiguity_score >= 0.0);
    }

    // Without 'c', 'm' or 's' no modal verb can be spelled.
    #[test]
    fn ambiguity_is_zero_without_modals(text in "[abd-lnoprt-zABD-LNOPRT-Z .!?\n]{0,80}") {
        prop_assert_eq!(analyze(&text, &[]).ambiguity_score, 0.0);
    }

    #[test]
    fn risk_ratings_stay_on_scale(
        text in "((legal compliance|financial exposure|operational disruption|other) ){0,20}",
        severity_max in 1u32..8,
        likelihood_max in 1u32..8,
    ) {
        let params = RiskAssessmentParameters {
            severity_scale_max: severity_max,
            likelihood_scale_max: likelihood_max,
            ..Default::default()
        };
        let risks = RiskIdentifier::new().identify(&text, &DealContext::default(), &params);

        for item in &risks {
            prop_assert!((1..=severity_max).contains(&item.severity));
            prop_assert!((1..=likelihood_max).contains(&item.likelihood));
            let phrase = item.category.replace('_', " ").to_lowercase();
            prop_assert!(text.contains(&phrase));
        }
        for category in &params.risk_categories_to_scan {
            let phrase = category.replace('_', " ").to_lowercase();
            let flagged = risks.iter().any(|item| &item.category == category);
            prop_assert_eq!(flagged, text.contains(&phrase));
        }
    }

    #[test]
    fn closure_probability_is_bounded(
        deal_value in -1.0e9f64..1.0e9,
        regulatory in -1.0e4f64..1.0e4,
        missing in 0usize..50,
    ) {
        let probability = ClosureProbabilityPredictor::new().predict(
            &DealFinancials { deal_value_usd_m: deal_value },
            &DealStructure::default(),
            &AgreementAnalysis { missing_clauses: vec!["clause".to_string(); missing] },
            &MarketContext { regulatory_hurdle_score_1_5: regulatory },
            &PredictionModelConfig::default(),
        );
        prop_assert!((0.0..=100.0).contains(&probability));
    }
}
