use crate::flow::{AnswerMap, FlagMap};

/// Computes the ordered justification sentences for a terminal result.
///
/// This is a pure function of the result key and the full accumulated
/// answer/flag set. The sentences are denormalized display text: the
/// classification itself was already decided by reaching the result node,
/// and is never re-derived here. Every key, including unknown ones, yields a
/// non-empty list, so a reached result always has something to show.
pub fn result_reasons(result_key: &str, answers: &AnswerMap, flags: &FlagMap) -> Vec<String> {
    match result_key {
        "not_covered" => {
            if answers.get("q1").is_some_and(|a| a == "no") {
                return vec![
                    "You indicated the farm does not grow, harvest, pack, or hold produce."
                        .to_string(),
                ];
            }
            if answers.get("q2").is_some_and(|a| a == "yes") {
                return vec![
                    "You indicated average annual produce sales are $25,000 or less (3-year average)."
                        .to_string(),
                ];
            }
            vec!["Your answers indicate the Produce Safety Rule does not apply.".to_string()]
        }
        "rarely_consumed_raw" => {
            vec!["You indicated the commodity is rarely consumed raw.".to_string()]
        }
        "personal_consumption" => {
            vec!["You indicated the produce is for personal or on-farm consumption.".to_string()]
        }
        "processing_exemption" => vec![
            "You indicated the produce is intended for commercial processing with an adequate kill step."
                .to_string(),
        ],
        "qualified_exemption" => vec![
            "You indicated annual food sales are less than $500,000 and a majority of sales go to qualified end users."
                .to_string(),
        ],
        "covered" => {
            if flags.get("provisional").copied().unwrap_or(false) {
                return vec![
                    "You selected a provisional result because you were not sure about the qualified exemption test."
                        .to_string(),
                    "Confirm your sales and buyer details to determine whether a qualified exemption applies."
                        .to_string(),
                ];
            }
            vec![
                "You indicated the farm does not meet the qualified exemption test based on your sales and buyers."
                    .to_string(),
            ]
        }
        _ => vec!["Review your answers to confirm this result.".to_string()],
    }
}
