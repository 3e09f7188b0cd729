//! End-to-end battle engine scenarios with scripted collaborators.
//!
//! The oracle is a queue of canned replies (an empty queue behaves like
//! an unavailable backend, which exercises the fallback paths), the
//! repository is an in-memory map with the same merge semantics as the
//! production store, and randomness is a fixed sequence.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::sync::Mutex as StdMutex;

use async_trait::async_trait;
use gavel_application::{
    BattleEngine, BattlePatch, BattleRepository, EngineConfig, NoNotifier, Oracle, OracleError,
    StoreError, TranscriptEvent,
};
use gavel_domain::transcript::entities::Speaker;
use gavel_domain::{Battle, Case, Category, SequenceRandom, Stage, TurnAnalysis};

#[derive(Default)]
struct ScriptedOracle {
    replies: StdMutex<VecDeque<String>>,
    prompts: StdMutex<Vec<String>>,
}

impl ScriptedOracle {
    fn with_replies<'a>(replies: impl IntoIterator<Item = &'a str>) -> Arc<Self> {
        Arc::new(Self {
            replies: StdMutex::new(replies.into_iter().map(String::from).collect()),
            prompts: StdMutex::new(Vec::new()),
        })
    }

    /// Oracle with no replies: every request fails as unavailable.
    fn silent() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn prompt_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl Oracle for ScriptedOracle {
    async fn generate(&self, prompt: &str) -> Result<String, OracleError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(OracleError::Unavailable)
    }
}

#[derive(Default)]
struct MemRepo {
    battles: StdMutex<HashMap<String, Battle>>,
}

#[async_trait]
impl BattleRepository for MemRepo {
    async fn create(&self, mut battle: Battle) -> Result<Battle, StoreError> {
        let mut battles = self.battles.lock().unwrap();
        let id = format!("battle-{}", battles.len() + 1);
        battle.id = id.clone();
        battles.insert(id, battle.clone());
        Ok(battle)
    }

    async fn get(&self, id: &str) -> Result<Battle, StoreError> {
        self.battles
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn update(&self, id: &str, patch: BattlePatch) -> Result<Battle, StoreError> {
        let mut battles = self.battles.lock().unwrap();
        let battle = battles
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let mut value = serde_json::to_value(battle)
            .map_err(|err| StoreError::Serialization(err.to_string()))?;
        let patch_value = serde_json::to_value(&patch)
            .map_err(|err| StoreError::Serialization(err.to_string()))?;
        if let (Some(record), Some(fields)) = (value.as_object_mut(), patch_value.as_object()) {
            for (key, field) in fields {
                record.insert(key.clone(), field.clone());
            }
        }
        let merged: Battle = serde_json::from_value(value)
            .map_err(|err| StoreError::Serialization(err.to_string()))?;
        battles.insert(id.to_string(), merged.clone());
        Ok(merged)
    }
}

fn sample_case() -> Case {
    Case {
        id: "case-1".into(),
        title: "People v. Carter".into(),
        case_type: "criminal".into(),
        difficulty: 3,
        issue: "4th Amendment Search and Seizure".into(),
        description: String::new(),
        facts: "A traffic stop led to a vehicle search without a warrant.".into(),
        statutes: String::new(),
        burden_of_proof: String::new(),
        user_argument: String::new(),
        defense_thesis: String::new(),
        notes: String::new(),
        evidence: vec![],
        precedents: vec![],
    }
}

async fn engine_with(
    oracle: Arc<ScriptedOracle>,
    rng: SequenceRandom,
) -> (BattleEngine, Arc<MemRepo>) {
    let repo = Arc::new(MemRepo::default());
    let engine = BattleEngine::open(
        sample_case(),
        oracle,
        repo.clone(),
        Arc::new(NoNotifier),
        Box::new(rng),
        EngineConfig::manual(),
    )
    .await
    .unwrap();
    (engine, repo)
}

#[tokio::test]
async fn test_opening_seeds_banner_and_scripted_statement() {
    let (engine, repo) = engine_with(ScriptedOracle::silent(), SequenceRandom::new()).await;

    assert_eq!(engine.stage().await, Stage::Opening);
    let transcript = engine.transcript().await;
    assert_eq!(transcript.len(), 2);
    assert!(transcript[0].text.contains("Opening Statements Phase Begins"));
    assert_eq!(transcript[1].speaker, Speaker::Counsel);
    assert!(transcript[1].text.contains("People v. Carter"));

    let stored = repo.get("battle-1").await.unwrap();
    assert_eq!(stored.stage(), Stage::Opening);
    assert!(!stored.is_completed());
}

#[tokio::test]
async fn test_opening_advances_after_two_exchanges() {
    let oracle = ScriptedOracle::with_replies([
        "The evidence will show a lawful, by-the-book stop.",
        "The state's position rests on well-settled precedent.",
        "Describe for the court what the officer observed that night.",
    ]);
    let (engine, _repo) = engine_with(oracle, SequenceRandom::new().with_ints([8, 8])).await;

    engine
        .submit_argument("The stop violated the Fourth Amendment standard set by precedent.")
        .await
        .unwrap();
    assert_eq!(engine.stage().await, Stage::Opening);

    engine
        .submit_argument("The evidence shows the search exceeded its lawful scope.")
        .await
        .unwrap();
    assert_eq!(engine.stage().await, Stage::Direct);

    let transcript = engine.transcript().await;
    assert!(
        transcript
            .iter()
            .any(|t| t.text.contains("Direct Examination Phase Begins"))
    );
    // The counsel opens the examination with its own question.
    let last = transcript.last().unwrap();
    assert_eq!(last.speaker, Speaker::Counsel);
    assert_eq!(
        last.text,
        "Describe for the court what the officer observed that night."
    );
}

#[tokio::test]
async fn test_examination_finish_and_manual_advance() {
    let (engine, _repo) = engine_with(ScriptedOracle::silent(), SequenceRandom::new()).await;

    engine
        .submit_argument("The stop lacked reasonable suspicion under the governing statute.")
        .await
        .unwrap();
    engine
        .submit_argument("Precedent requires suppression of the evidence found in the trunk.")
        .await
        .unwrap();
    assert_eq!(engine.stage().await, Stage::Direct);

    // Refused: no finish signal yet, and only the kickoff exchange so far.
    assert!(!engine.advance_stage().await.unwrap());

    for _ in 0..2 {
        engine
            .submit_argument("Walk the jury through the timeline of the traffic stop, please.")
            .await
            .unwrap();
    }
    // Three exchanges now, but still no finish signal.
    assert!(!engine.advance_stage().await.unwrap());

    engine.finish_examination().await.unwrap();
    let transcript = engine.transcript().await;
    assert!(
        transcript
            .iter()
            .any(|t| t.text.contains("The court acknowledges"))
    );

    assert!(engine.advance_stage().await.unwrap());
    assert_eq!(engine.stage().await, Stage::Cross);
}

#[tokio::test]
async fn test_sustained_objection_bumps_clarity_without_a_reply() {
    let oracle = ScriptedOracle::silent();
    let (engine, repo) = engine_with(oracle.clone(), SequenceRandom::new().with_flips([true])).await;

    engine
        .submit_argument("Objection, Your Honor, that testimony is hearsay.")
        .await
        .unwrap();

    let battle = engine.battle().await;
    assert_eq!(battle.objections().raised(), 1);
    assert_eq!(battle.objections().sustained(), 1);
    assert_eq!(battle.scores().get(Category::Clarity), 8);
    // The counsel stays silent on a ruling.
    assert_eq!(oracle.prompt_count(), 0);

    let stored = repo.get("battle-1").await.unwrap();
    assert_eq!(stored.objections().raised(), 1);
    assert_eq!(stored.scores().get(Category::Clarity), 8);

    let transcript = engine.transcript().await;
    assert_eq!(
        transcript.last().unwrap().text,
        "Objection sustained. hearsay is not permitted."
    );
}

#[tokio::test]
async fn test_deep_analysis_applies_once_per_marker() {
    let (engine, _repo) = engine_with(ScriptedOracle::silent(), SequenceRandom::new()).await;

    engine
        .submit_argument("The precedent in Terry v. Ohio controls this stop.")
        .await
        .unwrap();

    let batch = engine.next_analysis_batch().await.expect("pending argument");
    assert_eq!(batch.marker, 1);
    assert!(batch.arguments.contains("Terry v. Ohio"));
    assert!(engine.next_analysis_batch().await.is_none());

    let analysis = TurnAnalysis {
        logic: Some(70),
        persuasiveness: Some(60),
        precedent: Some(90),
        clarity: Some(65),
        aggression: Some(40),
        confidence: Some(80),
        legal_reasoning: Some(75),
        category: Some(Category::Precedent),
        score_change: 10,
        objection: None,
        finish_phase: false,
    };

    let before = engine.battle().await.scores().get(Category::Precedent);
    engine
        .apply_deep_analysis(batch.marker, analysis.clone())
        .await
        .unwrap();
    let after = engine.battle().await.scores().get(Category::Precedent);
    assert_eq!(after, before + 10);

    // Redelivery of the same batch is a no-op.
    engine
        .apply_deep_analysis(batch.marker, analysis)
        .await
        .unwrap();
    assert_eq!(engine.battle().await.scores().get(Category::Precedent), after);

    // The oracle's gauges supersede the keyword heuristics.
    let strategy = engine.strategy().await;
    assert_eq!(strategy.aggression, 40);
    assert_eq!(strategy.precedent_use, 90);
    assert_eq!(strategy.confidence, 80);
}

#[tokio::test]
async fn test_oracle_finish_flag_marks_examination_eligible() {
    let (engine, _repo) = engine_with(ScriptedOracle::silent(), SequenceRandom::new()).await;

    // Reach direct examination, then log enough exchanges to advance.
    engine
        .submit_argument("The stop lacked reasonable suspicion from the outset.")
        .await
        .unwrap();
    engine
        .submit_argument("Suppression is the only remedy consistent with precedent.")
        .await
        .unwrap();
    for _ in 0..2 {
        engine
            .submit_argument("Describe the lighting conditions at the scene, officer.")
            .await
            .unwrap();
    }

    let batch = engine.next_analysis_batch().await.expect("pending batch");
    let analysis = TurnAnalysis {
        logic: None,
        persuasiveness: None,
        precedent: None,
        clarity: None,
        aggression: None,
        confidence: None,
        legal_reasoning: None,
        category: None,
        score_change: 0,
        objection: None,
        finish_phase: true,
    };
    engine
        .apply_deep_analysis(batch.marker, analysis)
        .await
        .unwrap();

    assert!(engine.advance_stage().await.unwrap());
    assert_eq!(engine.stage().await, Stage::Cross);
}

#[tokio::test]
async fn test_battle_runs_to_completion_and_seals() {
    let (engine, repo) = engine_with(ScriptedOracle::silent(), SequenceRandom::new()).await;

    // Opening: two exchanges.
    engine
        .submit_argument("The stop lacked reasonable suspicion under the statute.")
        .await
        .unwrap();
    engine
        .submit_argument("The evidence must be suppressed as fruit of the poisonous tree.")
        .await
        .unwrap();
    assert_eq!(engine.stage().await, Stage::Direct);

    // Direct: two more exchanges on top of the kickoff, then finish.
    for _ in 0..2 {
        engine
            .submit_argument("Tell the court exactly when the canine unit arrived.")
            .await
            .unwrap();
    }
    engine.finish_examination().await.unwrap();
    assert!(engine.advance_stage().await.unwrap());
    assert_eq!(engine.stage().await, Stage::Cross);

    // Cross: same pattern.
    for _ in 0..2 {
        engine
            .submit_argument("Isn't it true the report never mentions a warrant?")
            .await
            .unwrap();
    }
    engine.finish_examination().await.unwrap();
    assert!(engine.advance_stage().await.unwrap());
    assert_eq!(engine.stage().await, Stage::Closing);

    // Closing: the second user turn completes the battle.
    engine
        .submit_argument("The state asks you to reward an unconstitutional search.")
        .await
        .unwrap();
    engine
        .submit_argument("Suppress the evidence and hold the government to its burden.")
        .await
        .unwrap();

    let battle = engine.battle().await;
    assert!(battle.is_completed());
    assert!(battle.duration_seconds().is_some());
    assert!(engine.is_closed());

    let transcript = engine.transcript().await;
    assert!(transcript.last().unwrap().text.contains("Case Complete"));
    let sealed_len = transcript.len();

    // Sealed: every further command is a no-op.
    engine.submit_argument("One more thing.").await.unwrap();
    assert!(!engine.advance_stage().await.unwrap());
    assert!(!engine.synthesize_insights().await.unwrap());
    assert!(engine.next_analysis_batch().await.is_none());
    assert_eq!(engine.transcript().await.len(), sealed_len);

    let stored = repo.get("battle-1").await.unwrap();
    assert!(stored.is_completed());
    assert_eq!(stored.duration_seconds(), battle.duration_seconds());
}

#[tokio::test]
async fn test_ingested_events_deduplicate_by_marker() {
    let oracle = ScriptedOracle::silent();
    let (engine, _repo) = engine_with(oracle.clone(), SequenceRandom::new()).await;
    let base = engine.transcript().await.len();

    engine
        .ingest_event(TranscriptEvent::user(
            1,
            "The warrant requirement admits no exception here.",
        ))
        .await
        .unwrap();
    let len = engine.transcript().await.len();
    assert_eq!(len, base + 1);

    // Redelivery of the same marker changes nothing.
    engine
        .ingest_event(TranscriptEvent::user(
            1,
            "The warrant requirement admits no exception here.",
        ))
        .await
        .unwrap();
    assert_eq!(engine.transcript().await.len(), len);

    // The secondary channel speaks for counsel; no oracle call is made.
    engine
        .ingest_event(TranscriptEvent::assistant(
            2,
            "Probable cause was amply documented in the report.",
        ))
        .await
        .unwrap();
    let transcript = engine.transcript().await;
    assert_eq!(transcript.len(), len + 1);
    assert_eq!(transcript.last().unwrap().speaker, Speaker::Counsel);
    assert_eq!(oracle.prompt_count(), 0);
}

#[tokio::test]
async fn test_close_leaves_unfinished_battle_in_progress() {
    let (engine, repo) = engine_with(ScriptedOracle::silent(), SequenceRandom::new()).await;

    engine
        .submit_argument("The stop lacked reasonable suspicion under the statute.")
        .await
        .unwrap();
    engine.close().await.unwrap();

    // Quitting mid-argument only tears down background work; the
    // record stays in progress with no terminal entry.
    assert!(engine.is_closed());
    let battle = engine.battle().await;
    assert!(!battle.is_completed());
    assert_eq!(battle.stage(), Stage::Opening);
    assert!(battle.duration_seconds().is_none());

    let transcript = engine.transcript().await;
    assert!(!transcript.last().unwrap().text.contains("Case Complete"));

    let stored = repo.get("battle-1").await.unwrap();
    assert!(!stored.is_completed());
}

#[tokio::test]
async fn test_ingested_transition_still_plays_the_kickoff() {
    let oracle =
        ScriptedOracle::with_replies(["Officer, walk the court through your initial observations."]);
    let (engine, _repo) = engine_with(oracle.clone(), SequenceRandom::new()).await;

    // Three ingested user turns exhaust the opening quota.
    for (marker, argument) in [
        (1, "The stop lacked reasonable suspicion from the first moment."),
        (2, "Precedent requires a warrant for the trunk search."),
        (3, "The evidence must therefore be suppressed."),
    ] {
        engine
            .ingest_event(TranscriptEvent::user(marker, argument))
            .await
            .unwrap();
    }
    assert_eq!(engine.stage().await, Stage::Direct);

    // Ordinary ingested turns got no generated reply, but the
    // examination still opens with a counsel turn.
    assert_eq!(oracle.prompt_count(), 1);
    let transcript = engine.transcript().await;
    let banner = transcript
        .iter()
        .position(|t| t.text.contains("Direct Examination Phase Begins"))
        .expect("transition banner");
    assert!(
        transcript[banner..]
            .iter()
            .any(|t| t.speaker == Speaker::Counsel)
    );
    assert_eq!(
        transcript.last().unwrap().text,
        "Officer, walk the court through your initial observations."
    );
}

#[tokio::test]
async fn test_objection_turns_count_toward_the_stage_quota() {
    let oracle = ScriptedOracle::with_replies(["State your first question for the witness."]);
    let (engine, _repo) = engine_with(
        oracle,
        SequenceRandom::new().with_flips([false, false, false]),
    )
    .await;

    for _ in 0..3 {
        engine
            .submit_argument("Objection, Your Honor, counsel is leading the witness.")
            .await
            .unwrap();
    }

    // Three user turns, even as objections, exhaust the opening quota.
    assert_eq!(engine.stage().await, Stage::Direct);
    assert_eq!(engine.battle().await.objections().raised(), 3);
}

#[tokio::test]
async fn test_insight_synthesis_updates_the_sheet() {
    // Two counsel replies, the direct-examination kickoff, then the
    // insight reply.
    let oracle = ScriptedOracle::with_replies([
        "The stop was reasonable from start to finish.",
        "Precedent gives officers latitude during an active stop.",
        "Officer, how long did the stop last in total?",
        r#"{"notes": "Press the timeline gap between the stop and the search.",
            "evidence": [{"name": "Dispatch Log", "content": "Stop lasted 40 minutes",
                          "type": "document", "relevance": "Supports undue-delay argument"}],
            "precedents": ["Rodriguez v. United States (2015) - stop duration limits"]}"#,
    ]);
    let (engine, repo) = engine_with(oracle, SequenceRandom::new()).await;

    // Too little of the record yet.
    assert!(!engine.synthesize_insights().await.unwrap());

    for _ in 0..2 {
        engine
            .submit_argument("The duration of the stop exceeded its mission under precedent.")
            .await
            .unwrap();
    }
    assert!(engine.synthesize_insights().await.unwrap());

    let battle = engine.battle().await;
    let sheet = battle.insights().expect("insights were synthesized");
    assert!(sheet.insights.notes.contains("timeline gap"));
    assert_eq!(sheet.insights.evidence.len(), 1);

    let stored = repo.get("battle-1").await.unwrap();
    assert!(stored.insights().is_some());
}
