//! Analysis prompts: deep turn analysis and insight synthesis.

use crate::battle::stage::Stage;
use crate::case::entities::Case;
use crate::transcript::entities::Turn;

/// How many trailing transcript entries the insight prompt includes
pub const INSIGHT_CONTEXT_TURNS: usize = 10;

/// Build the deep-analysis prompt for a batch of recent user arguments.
///
/// The oracle must answer with bare JSON matching the documented
/// schema; [`parse_turn_analysis`] tolerates fenced or prose-wrapped
/// replies anyway.
///
/// [`parse_turn_analysis`]: crate::analysis::turn_analysis::parse_turn_analysis
pub fn turn_analysis_prompt(case: &Case, stage: Stage, user_arguments: &str) -> String {
    format!(
        r#"You are analyzing a lawyer's courtroom performance in the {stage} phase of trial.

Case: {title}
Issue: {issue}
Current Stage: {stage}

User's Recent Arguments:
{user_arguments}

Analyze the user's performance and respond with ONLY a JSON object (no markdown, no explanation):
{{
  "logic": <number 0-100>,
  "persuasiveness": <number 0-100>,
  "precedent": <number 0-100>,
  "clarity": <number 0-100>,
  "aggression": <number 0-100>,
  "confidence": <number 0-100>,
  "legal_reasoning": <number 0-100>,
  "category": "logic" | "persuasiveness" | "precedent" | "clarity",
  "score_change": <number -10 to 20>,
  "objection_detected": "none" | "hearsay" | "relevance" | "leading" | "speculation" | "foundation" | "argumentative",
  "finish_phase": <boolean>
}}

Scoring Guidelines:
- Logic: Sound reasoning, cause-effect relationships, logical structure
- Persuasiveness: Emotional appeal, compelling language, conviction
- Precedent: Use of case law, statutes, legal principles
- Clarity: Clear communication, organized thoughts, concise points
- Aggression: Assertiveness, confidence, forceful language
- Confidence: Certainty, decisiveness, lack of hedging
- Legal Reasoning: Legal analysis depth

Detect objections if user says phrases like "objection hearsay", "objection relevance", etc.
Detect finish_phase if user says "that's all your honor", "no further questions", etc."#,
        stage = stage,
        title = case.title,
        issue = case.issue,
        user_arguments = user_arguments,
    )
}

/// Build the insight-synthesis prompt over the recent transcript.
pub fn insights_prompt(case: &Case, transcript: &[Turn]) -> String {
    let conversation = transcript
        .iter()
        .rev()
        .take(INSIGHT_CONTEXT_TURNS)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .map(|turn| format!("{}: {}", turn.speaker, turn.text))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        r#"You are an expert legal analyst reviewing a courtroom battle. Analyze the following conversation and generate strategic insights.

CASE INFORMATION:
Title: {title}
Type: {case_type}
Legal Issue: {issue}
Facts: {facts}
Statutes: {statutes}

RECENT CONVERSATION:
{conversation}

Based on this conversation, generate a JSON response with the following structure:

{{
  "notes": "Strategic analysis of the arguments presented, strengths and weaknesses identified, tactical recommendations (2-3 sentences)",
  "evidence": [
    {{
      "name": "Evidence item name",
      "content": "Brief description of what this evidence shows",
      "type": "document|video|testimony|physical",
      "relevance": "How this relates to the discussion (1 sentence)"
    }}
  ],
  "precedents": [
    "Case Name v. Defendant (Year) - Brief explanation of how this precedent applies"
  ]
}}

REQUIREMENTS:
- Generate 2-4 relevant evidence items based on the conversation topics
- Include 2-3 applicable precedents that relate to arguments made
- Notes should be tactical and specific to what was discussed
- Evidence should be realistic and case-appropriate
- Precedents should be real cases when possible
- Focus on what was actually discussed in the conversation
- Keep descriptions concise but informative

Return ONLY valid JSON, no markdown formatting."#,
        title = case.title,
        case_type = case.case_type,
        issue = case.issue,
        facts = case.facts,
        statutes = if case.statutes.is_empty() {
            "Not specified"
        } else {
            &case.statutes
        },
        conversation = conversation,
    )
}
