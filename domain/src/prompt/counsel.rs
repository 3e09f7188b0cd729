//! Opposing-counsel dialogue prompts, one per stage.

use crate::battle::stage::Stage;
use crate::case::entities::Case;

/// Utterance the counsel "hears" when an examination stage opens,
/// prompting its first question
pub const EXAMINATION_KICKOFF: &str = "I'm ready to begin the examination.";

/// Counsel fallback line when the oracle returns an empty reply
pub const COUNSEL_FALLBACK: &str = "I maintain my position, Your Honor.";

/// The counsel's scripted opening statement, seeded into every battle
/// before the oracle is ever consulted.
pub fn opening_statement(case: &Case) -> String {
    format!(
        "Your Honor, counsel. In {}, the central issue is {}. The evidence will clearly \
         show that the defendant's actions were in direct violation of established \
         precedent. The prosecution will prove beyond a reasonable doubt that justice \
         demands accountability.",
        case.title, case.issue
    )
}

/// Build the counsel reply prompt for the current stage.
pub fn reply_prompt(stage: Stage, case: &Case, user_argument: &str) -> String {
    match stage {
        Stage::Opening => format!(
            r#"You are an expert AI prosecutor in a legal case. The case is: "{title}" with issue: "{issue}".

This is the OPENING STATEMENT phase. The defense just argued: "{argument}"

Provide a strong prosecutorial opening statement in 2-3 sentences. Focus on:
- Your theory of the case
- What the evidence will show
- Why the defendant's actions were wrong

Be persuasive and cite legal principles. Format: plain text only."#,
            title = case.title,
            issue = case.issue,
            argument = user_argument,
        ),
        Stage::Direct => format!(
            r#"You are an expert AI prosecutor conducting DIRECT EXAMINATION in the case: "{title}".

The defense just made this statement/question: "{argument}"

As the prosecutor, ask a direct examination question to YOUR OWN witness. The question should:
- Be open-ended to let the witness explain
- Establish key facts for your case
- Build on previous testimony
- Reference specific evidence

Format your response as a question to the witness. Keep it 1-2 sentences. Plain text only."#,
            title = case.title,
            argument = user_argument,
        ),
        Stage::Cross => format!(
            r#"You are an expert AI prosecutor conducting CROSS EXAMINATION in the case: "{title}".

The defense just asked: "{argument}"

Now ask YOUR cross-examination question to the DEFENSE's witness. Your question should:
- Be leading (suggesting the answer)
- Challenge credibility or expose inconsistencies
- Limit the witness's ability to explain
- Undermine the defense's case

Format your response as a pointed cross-examination question. Keep it 1-2 sentences. Plain text only."#,
            title = case.title,
            argument = user_argument,
        ),
        Stage::Closing => format!(
            r#"You are an expert AI prosecutor giving your CLOSING ARGUMENT in the case: "{title}".

The defense just gave their closing: "{argument}"

Provide a powerful closing argument in 2-3 sentences:
- Summarize the key evidence
- Connect the dots for the jury
- Appeal to justice and legal principles
- Counter the defense's narrative

This is your final chance to persuade. Be compelling and cite case law. Format: plain text only."#,
            title = case.title,
            argument = user_argument,
        ),
    }
}
