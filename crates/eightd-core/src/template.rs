//! The fixed 8D problem-solving story template.
//!
//! Entries are created in this order and linked with `order` = position + 1.
//! D7 and D8 both carry "Congratulate" titles in the source template; the D7
//! text actually describes preventing recurrence. Kept verbatim.

/// One user story of the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryTemplate {
    pub subject: &'static str,
    pub description: &'static str,
}

const fn story(subject: &'static str, description: &'static str) -> StoryTemplate {
    StoryTemplate {
        subject,
        description,
    }
}

/// D0–D8, in creation order.
pub const EIGHT_D_STORIES: &[StoryTemplate] = &[
    story(
        "D0: Plan",
        "Plan for solving the problem and determine the prerequisites.",
    ),
    story(
        "D1: Establish a team",
        "Select a team with product/process knowledge.",
    ),
    story(
        "D2: Define and describe the problem",
        "Define and describe the problem—Specify the problem by identifying in quantifiable terms \
         the who, what, where, when, why, how, and how many (5W2H) of the problem.",
    ),
    story(
        "D3: Develop and execute an interim containment plan",
        "Define and implement containment actions to isolate the problem.",
    ),
    story(
        "D4: Determine, identify, and verify root causes",
        "Identify all applicable causes that could explain why the problem occurred. Also identify why \
         the problem went unnoticed when it occurred. All causes should be verified or proved, not \
         determined by fuzzy brainstorming. Five whys and cause and effect diagrams can be used to map \
         causes against the identified effect or problem.",
    ),
    story(
        "D5: Choose and verify permanent corrections",
        "Identify the corrective action and, through preproduction programs, quantitatively confirm \
         the selected correction will resolve the problem.",
    ),
    story(
        "D6: Implement and validate corrective actions",
        "Implement the selected corrective action and verify its effectiveness.",
    ),
    story(
        "D7: Congratulate the team",
        "Modify the management systems, operation systems, practices, and procedures to prevent \
         recurrence of this as well as all similar problems.",
    ),
    story(
        "D8: Congratulate your team",
        "Recognize the team’s collective efforts. The team must be thanked formally by the organization.",
    ),
];
