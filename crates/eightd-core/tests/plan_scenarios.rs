//! Plan-level scenarios exercised through the public API only.

use chrono::NaiveDate;
use eightd_core::entities::NewUserStory;
use eightd_core::template::EIGHT_D_STORIES;
use eightd_core::{ProblemStatement, RunPlan};
use pretty_assertions::assert_eq;

fn line_problem(desc: &str) -> ProblemStatement {
    ProblemStatement {
        project_name: "X3570".into(),
        line_name: "L1_AOI".into(),
        error_type: "error1".into(),
        error_desc: desc.into(),
        quantity: 15,
        inspection_method: "Automated AOI system".into(),
    }
}

#[test]
fn subject_pattern_holds_for_multi_word_descriptions() {
    let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
    let plan = RunPlan::build(63, &line_problem("Missing solder paste"), date, "9c0e").unwrap();

    let parts: Vec<&str> = plan.epic.subject.rsplitn(3, '_').collect();
    assert_eq!(parts[0], "9c0e");
    assert_eq!(parts[1], "20241231");
    assert_eq!(parts[2], "X3570_L1_AOI_error1_Missing_solder_paste");
    assert!(!plan.epic.subject.contains(' '));
}

#[test]
fn stories_mirror_the_template() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let plan = RunPlan::build(7, &line_problem("Threshold"), date, "ab12").unwrap();

    let expected: Vec<NewUserStory> = EIGHT_D_STORIES
        .iter()
        .map(|t| NewUserStory {
            project: 7,
            subject: t.subject.to_string(),
            description: t.description.to_string(),
        })
        .collect();
    assert_eq!(plan.stories, expected);
}

#[test]
fn plan_serializes_for_preview() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let plan = RunPlan::build(63, &line_problem("Threshold"), date, "ab12").unwrap();

    let value = serde_json::to_value(&plan).unwrap();
    assert_eq!(value["project_id"], 63);
    assert_eq!(
        value["epic"]["subject"],
        "X3570_L1_AOI_error1_Threshold_20240101_ab12"
    );
    assert_eq!(value["stories"][0]["subject"], "D0: Plan");
}
