//! The battle engine: orchestrates one run of the trial simulation.
//!
//! All mutable state for a battle lives behind a single async mutex, so
//! the two ingestion channels, the deep-analysis poller, and manual
//! commands serialize through one point. Oracle calls never happen
//! under the lock — callers assemble a prompt, release the lock, and
//! re-acquire it to apply the result, tolerating whatever happened in
//! between.
//!
//! The oracle is fail-open throughout: a dead backend degrades the
//! simulation to local heuristics and canned counsel lines, it never
//! stalls a turn.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use gavel_domain::battle::stage::COMPLETION_ANNOUNCEMENT;
use gavel_domain::heuristics::finish::{FINISH_ACKNOWLEDGMENT, FINISH_PHRASE};
use gavel_domain::heuristics::objection::{SUSTAINED_CLARITY_BONUS, ruling_announcement};
use gavel_domain::prompt::{analyst, counsel};
use gavel_domain::transcript::entities::Turn;
use gavel_domain::{
    Battle, BattleStatus, Case, Category, ObjectionKind, QualityTier, RandomSource, Ruling, Stage,
    StageDecision, StageProgress, StageSignal, StrategyProfile, TurnAnalysis, classify_quality,
    derive_strategy, detect_objection, guess_category, is_finish_phrase, parse_battle_insights,
    parse_turn_analysis, rule_on_objection, score_change,
};
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::ports::battle_repository::{BattlePatch, BattleRepository, StoreError};
use crate::ports::notifier::CourtroomNotifier;
use crate::ports::oracle::Oracle;
use crate::ports::transcript_source::{EventRole, TranscriptEvent};

/// Court feedback appended when a scored argument lands negative
const SUBSTANCE_REBUKE: &str =
    "Counsel, that argument lacks substance. Please provide more substantive legal reasoning.";

/// Transcript entries required before insight synthesis is worthwhile
const MIN_INSIGHT_TRANSCRIPT: usize = 6;

/// Errors from the battle engine
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Engine tuning knobs.
///
/// The defaults match interactive use; [`EngineConfig::manual`] turns
/// the engine fully deterministic for tests and embedding hosts that
/// drive the analysis cadence themselves.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// How often the deep-analysis poller wakes up
    pub analysis_poll_interval: Duration,
    /// Minimum spacing between two deep-analysis requests
    pub analysis_min_gap: Duration,
    /// Most recent unanalyzed arguments sent per analysis request
    pub analysis_batch_size: usize,
    /// Transcript length multiple that triggers insight synthesis
    pub insight_cadence: usize,
    /// Spawn the analysis poller and elapsed-time ticker
    pub background_tasks: bool,
    /// Await counsel replies inline instead of spawning them
    pub synchronous_replies: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            analysis_poll_interval: Duration::from_secs(3),
            analysis_min_gap: Duration::from_secs(5),
            analysis_batch_size: 3,
            insight_cadence: 10,
            background_tasks: true,
            synchronous_replies: false,
        }
    }
}

impl EngineConfig {
    /// No background tasks, counsel replies awaited inline.
    pub fn manual() -> Self {
        Self {
            background_tasks: false,
            synchronous_replies: true,
            ..Self::default()
        }
    }
}

/// A batch of recent user arguments awaiting deep analysis.
///
/// The marker is the high-water mark of arguments covered by this
/// batch; applying the same marker twice is a no-op, so at-least-once
/// delivery of analysis results is safe.
#[derive(Debug, Clone)]
pub struct AnalysisBatch {
    pub marker: u64,
    pub stage: Stage,
    pub arguments: String,
}

/// A pending counsel reply: the stage it belongs to and the utterance
/// it responds to.
#[derive(Debug, Clone)]
struct CounselCue {
    stage: Stage,
    argument: String,
}

struct EngineState {
    battle: Battle,
    transcript: Vec<Turn>,
    progress: StageProgress,
    strategy: StrategyProfile,
    rng: Box<dyn RandomSource>,
    /// Every user argument, in order, for deep-analysis batching
    user_arguments: Vec<String>,
    /// How many of `user_arguments` have been sent for analysis
    analyzed_arguments: usize,
    /// High-water mark of applied analysis batches
    applied_analysis_marker: u64,
    last_analysis_at: Option<Instant>,
    /// High-water mark of ingested transcript events
    last_event_marker: Option<u64>,
}

struct EngineInner {
    case: Case,
    oracle: Arc<dyn Oracle>,
    repository: Arc<dyn BattleRepository>,
    notifier: Arc<dyn CourtroomNotifier>,
    config: EngineConfig,
    cancel: CancellationToken,
    started_at: Instant,
    state: Mutex<EngineState>,
}

impl Drop for EngineInner {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// One running battle. Cheap to clone; all clones share the same state.
#[derive(Clone)]
pub struct BattleEngine {
    inner: Arc<EngineInner>,
}

impl BattleEngine {
    /// Open a new battle against a case.
    ///
    /// Persists the battle, seeds the transcript with the stage banner
    /// and the counsel's scripted opening statement, and (unless
    /// disabled) spawns the background tasks.
    pub async fn open(
        case: Case,
        oracle: Arc<dyn Oracle>,
        repository: Arc<dyn BattleRepository>,
        notifier: Arc<dyn CourtroomNotifier>,
        rng: Box<dyn RandomSource>,
        config: EngineConfig,
    ) -> Result<Self, EngineError> {
        let battle = repository.create(Battle::open(case.id.clone())).await?;
        info!(battle_id = %battle.id, case = %case.title, "battle opened");

        let opening = counsel::opening_statement(&case);
        let strategy = derive_strategy(&opening);

        let inner = Arc::new(EngineInner {
            case,
            oracle,
            repository,
            notifier,
            config,
            cancel: CancellationToken::new(),
            started_at: Instant::now(),
            state: Mutex::new(EngineState {
                battle,
                transcript: Vec::new(),
                progress: StageProgress::new(),
                strategy,
                rng,
                user_arguments: Vec::new(),
                analyzed_arguments: 0,
                applied_analysis_marker: 0,
                last_analysis_at: None,
                last_event_marker: None,
            }),
        });
        let engine = Self { inner };

        {
            let mut state = engine.inner.state.lock().await;
            // The scripted opening is seeded directly: it responds to
            // nothing, so it does not count as an exchange.
            engine.append_turn(&mut state, Turn::court(Stage::Opening.transition_announcement()));
            engine.append_turn(&mut state, Turn::counsel(opening));
            engine.inner.notifier.on_strategy(&state.strategy);
        }

        if engine.inner.config.background_tasks {
            engine.spawn_background_tasks();
        }
        Ok(engine)
    }

    /// The case being argued.
    pub fn case(&self) -> &Case {
        &self.inner.case
    }

    /// Seconds since the battle opened.
    pub fn elapsed_seconds(&self) -> u64 {
        self.inner.started_at.elapsed().as_secs()
    }

    /// True once the engine has been closed or the battle completed.
    pub fn is_closed(&self) -> bool {
        self.inner.cancel.is_cancelled()
    }

    /// Snapshot of the battle record.
    pub async fn battle(&self) -> Battle {
        self.inner.state.lock().await.battle.clone()
    }

    /// Snapshot of the full transcript.
    pub async fn transcript(&self) -> Vec<Turn> {
        self.inner.state.lock().await.transcript.clone()
    }

    /// Latest counsel strategy profile.
    pub async fn strategy(&self) -> StrategyProfile {
        self.inner.state.lock().await.strategy
    }

    /// Current stage.
    pub async fn stage(&self) -> Stage {
        self.inner.state.lock().await.battle.stage()
    }

    /// Submit a user argument through the primary channel.
    ///
    /// The argument is appended, run through the local heuristics, and
    /// normally answered by the opposing counsel. Submissions after
    /// completion are no-ops.
    pub async fn submit_argument(&self, text: &str) -> Result<(), EngineError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(());
        }

        let cue = {
            let mut state = self.inner.state.lock().await;
            if state.battle.is_completed() {
                warn!("argument submitted after completion; ignoring");
                self.inner
                    .notifier
                    .on_notice("The case is complete. The court is deliberating.");
                return Ok(());
            }
            let stage = state.battle.stage();
            self.append_turn(&mut state, Turn::user(trimmed));
            state.user_arguments.push(trimmed.to_string());
            self.process_user_text(&mut state, stage, trimmed).await?
        };

        if let Some(cue) = cue {
            self.deliver_counsel(cue).await?;
        }
        Ok(())
    }

    /// Ingest one event from the secondary channel.
    ///
    /// Events at or below the high-water marker are duplicates and are
    /// dropped. The secondary channel produces its own counsel replies,
    /// so ordinary ingested user turns never trigger a generated reply
    /// here; a stage transition still plays the examination kickoff,
    /// whichever channel tripped it.
    pub async fn ingest_event(&self, event: TranscriptEvent) -> Result<(), EngineError> {
        let kickoff = {
            let mut state = self.inner.state.lock().await;
            if state.battle.is_completed() {
                return Ok(());
            }
            if let Some(last) = state.last_event_marker
                && event.marker <= last
            {
                debug!(marker = event.marker, "duplicate transcript event ignored");
                return Ok(());
            }
            state.last_event_marker = Some(event.marker);

            let text = event.text.trim().to_string();
            if text.is_empty() {
                return Ok(());
            }

            match event.role {
                EventRole::User => {
                    let stage = state.battle.stage();
                    self.append_turn(&mut state, Turn::user(&text));
                    state.user_arguments.push(text.clone());
                    let cue = self.process_user_text(&mut state, stage, &text).await?;
                    // A cue that outlives a stage change is the
                    // examination kickoff; every other cue is an
                    // ordinary reply the widget speaks instead.
                    cue.filter(|_| state.battle.stage() != stage)
                }
                EventRole::Assistant => self.record_counsel(&mut state, text).await?,
            }
        };

        if let Some(cue) = kickoff {
            self.deliver_counsel(cue).await?;
        }
        Ok(())
    }

    /// Request an explicit stage advance.
    ///
    /// Only honored when the stage machine has marked the stage
    /// advance-eligible (and, during examinations, the exchange minimum
    /// is met). Returns whether the stage moved.
    pub async fn advance_stage(&self) -> Result<bool, EngineError> {
        let cue = {
            let mut state = self.inner.state.lock().await;
            if state.battle.is_completed() {
                return Ok(false);
            }
            let stage = state.battle.stage();
            if state.progress.observe(stage, StageSignal::ManualAdvance) != StageDecision::Advance {
                debug!(%stage, "manual advance refused");
                self.inner.notifier.on_notice(
                    "The court is not ready to move on. Continue the examination or signal that you are finished.",
                );
                return Ok(false);
            }
            self.advance(&mut state).await?
        };

        if let Some(cue) = cue {
            self.deliver_counsel(cue).await?;
        }
        Ok(true)
    }

    /// Speak the canonical finish phrase on the user's behalf.
    pub async fn finish_examination(&self) -> Result<(), EngineError> {
        self.submit_argument(FINISH_PHRASE).await
    }

    /// Synthesize strategic insights from the recent transcript.
    ///
    /// Returns whether a fresh insight sheet was produced. Failures are
    /// reported as notices and swallowed: insights are an enrichment.
    pub async fn synthesize_insights(&self) -> Result<bool, EngineError> {
        let prompt = {
            let state = self.inner.state.lock().await;
            if state.battle.is_completed() {
                return Ok(false);
            }
            if state.transcript.len() < MIN_INSIGHT_TRANSCRIPT {
                self.inner
                    .notifier
                    .on_notice("Not enough of the record yet to analyze. Keep arguing.");
                return Ok(false);
            }
            analyst::insights_prompt(&self.inner.case, &state.transcript)
        };

        let reply = match self.inner.oracle.generate(&prompt).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(error = %err, "insight synthesis request failed");
                self.inner
                    .notifier
                    .on_notice("Analysis is unavailable right now.");
                return Ok(false);
            }
        };
        let insights = match parse_battle_insights(&reply) {
            Ok(insights) => insights,
            Err(err) => {
                warn!(error = %err, "unparseable insight reply; keeping previous sheet");
                return Ok(false);
            }
        };

        let mut state = self.inner.state.lock().await;
        if state.battle.is_completed() {
            return Ok(false);
        }
        state.battle.set_insights(insights, Utc::now());
        let sheet = state.battle.insights().cloned();
        let patch = BattlePatch {
            insights: sheet.clone(),
            ..Default::default()
        };
        self.persist(&state.battle.id, patch).await?;
        if let Some(sheet) = sheet {
            self.inner.notifier.on_insights(&sheet);
        }
        Ok(true)
    }

    /// Take the next deep-analysis batch, if any arguments are pending.
    ///
    /// Advances the analyzed high-water mark, so each argument is
    /// batched at most once.
    pub async fn next_analysis_batch(&self) -> Option<AnalysisBatch> {
        let mut state = self.inner.state.lock().await;
        if state.battle.is_completed() {
            return None;
        }
        let pending = &state.user_arguments[state.analyzed_arguments..];
        if pending.is_empty() {
            return None;
        }
        let take = pending.len().min(self.inner.config.analysis_batch_size);
        let arguments = pending[pending.len() - take..].join("\n\n");
        state.analyzed_arguments = state.user_arguments.len();
        state.last_analysis_at = Some(Instant::now());
        Some(AnalysisBatch {
            marker: state.analyzed_arguments as u64,
            stage: state.battle.stage(),
            arguments,
        })
    }

    /// One deep-analysis cycle: batch, ask the oracle, apply.
    ///
    /// Everything here is best-effort; a failed or unparseable reply is
    /// logged and dropped, never retried.
    pub async fn run_analysis_cycle(&self) {
        {
            let state = self.inner.state.lock().await;
            if state.battle.is_completed() {
                return;
            }
            if let Some(last) = state.last_analysis_at
                && last.elapsed() < self.inner.config.analysis_min_gap
            {
                return;
            }
        }
        let Some(batch) = self.next_analysis_batch().await else {
            return;
        };

        let prompt = analyst::turn_analysis_prompt(&self.inner.case, batch.stage, &batch.arguments);
        let reply = match self.inner.oracle.generate(&prompt).await {
            Ok(reply) => reply,
            Err(err) => {
                debug!(error = %err, "deep-analysis request failed");
                return;
            }
        };
        match parse_turn_analysis(&reply) {
            Ok(analysis) => {
                if let Err(err) = self.apply_deep_analysis(batch.marker, analysis).await {
                    warn!(error = %err, "failed to apply deep analysis");
                }
            }
            Err(err) => debug!(error = %err, "unparseable deep-analysis reply"),
        }
    }

    /// Apply one deep-analysis result.
    ///
    /// Batches at or below the applied high-water marker are duplicates
    /// and are dropped, so redelivery cannot double-apply a score.
    pub async fn apply_deep_analysis(
        &self,
        marker: u64,
        analysis: TurnAnalysis,
    ) -> Result<(), EngineError> {
        let mut state = self.inner.state.lock().await;
        if state.battle.is_completed() {
            return Ok(());
        }
        if marker <= state.applied_analysis_marker {
            debug!(marker, "duplicate analysis batch ignored");
            return Ok(());
        }
        state.applied_analysis_marker = marker;

        // The oracle's gauges supersede the local keyword heuristics.
        state.strategy = StrategyProfile {
            aggression: analysis.aggression.unwrap_or(50),
            precedent_use: analysis.precedent.unwrap_or(50),
            confidence: analysis.confidence.unwrap_or(50),
        };
        self.inner.notifier.on_strategy(&state.strategy);

        if let Some(category) = analysis.category
            && analysis.score_change != 0
            && let Some(applied) = state
                .battle
                .apply_score_delta(category, analysis.score_change)
        {
            debug!(%category, delta = analysis.score_change, applied, "deep-analysis score applied");
            self.inner.notifier.on_scores(state.battle.scores());
            let patch = BattlePatch {
                scores: Some(state.battle.scores().clone()),
                ..Default::default()
            };
            self.persist(&state.battle.id, patch).await?;
        }

        if let Some(kind) = analysis.objection {
            self.adjudicate(&mut state, kind).await?;
        }

        if analysis.finish_phase {
            let stage = state.battle.stage();
            if state.progress.observe(stage, StageSignal::OracleFinish) == StageDecision::Eligible {
                self.inner.notifier.on_advance_eligible(stage);
            }
        }
        Ok(())
    }

    /// Tear down the background tasks.
    ///
    /// Battle state is untouched: a battle completes only by advancing
    /// past closing, so walking away mid-argument leaves the stored
    /// record in progress.
    pub async fn close(&self) -> Result<(), EngineError> {
        self.inner.cancel.cancel();
        Ok(())
    }

    fn spawn_background_tasks(&self) {
        let engine = self.clone();
        let cancel = self.inner.cancel.clone();
        let poll = self.inner.config.analysis_poll_interval;
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(poll);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = ticker.tick() => engine.run_analysis_cycle().await,
                }
            }
            debug!("analysis poller stopped");
        });

        let engine = self.clone();
        let cancel = self.inner.cancel.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(Duration::from_secs(1));
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = ticker.tick() => {
                        engine.inner.notifier.on_elapsed(engine.elapsed_seconds());
                    }
                }
            }
        });
    }

    fn append_turn(&self, state: &mut EngineState, turn: Turn) {
        self.inner.notifier.on_turn(&turn);
        state.transcript.push(turn);
    }

    /// Run an appended user utterance through the heuristic pipeline.
    ///
    /// Returns the counsel cue to answer with, if the utterance
    /// deserves a generated reply.
    async fn process_user_text(
        &self,
        state: &mut EngineState,
        stage: Stage,
        text: &str,
    ) -> Result<Option<CounselCue>, EngineError> {
        // Every utterance counts toward the stage's user-turn quota,
        // objections and finish phrases included.
        let quota_advance =
            state.progress.observe(stage, StageSignal::UserTurn) == StageDecision::Advance;

        if let Some(kind) = detect_objection(text) {
            self.adjudicate(state, kind).await?;
            return if quota_advance {
                self.advance(state).await
            } else {
                Ok(None)
            };
        }

        if is_finish_phrase(text) {
            if state.progress.observe(stage, StageSignal::FinishPhrase) == StageDecision::Eligible {
                self.append_turn(state, Turn::court(FINISH_ACKNOWLEDGMENT));
                self.inner.notifier.on_advance_eligible(stage);
            }
            return if quota_advance {
                self.advance(state).await
            } else {
                Ok(None)
            };
        }

        let assessment = classify_quality(text, stage);
        let category = guess_category(text, state.rng.as_mut());
        let delta = score_change(&assessment, state.rng.as_mut());
        if let Some(applied) = state.battle.apply_score_delta(category, delta) {
            debug!(%category, delta, applied, tier = ?assessment.tier, "argument scored");
            self.inner.notifier.on_scores(state.battle.scores());
            let patch = BattlePatch {
                scores: Some(state.battle.scores().clone()),
                ..Default::default()
            };
            self.persist(&state.battle.id, patch).await?;
            if assessment.tier == QualityTier::Poor && applied < 0 {
                self.append_turn(state, Turn::court(SUBSTANCE_REBUKE));
            }
        }

        if quota_advance {
            return self.advance(state).await;
        }
        Ok(Some(CounselCue {
            stage,
            argument: text.to_string(),
        }))
    }

    /// Rule on a detected objection and apply its consequences.
    async fn adjudicate(
        &self,
        state: &mut EngineState,
        kind: ObjectionKind,
    ) -> Result<(), EngineError> {
        let ruling = rule_on_objection(state.rng.as_mut());
        if !state.battle.record_objection(ruling) {
            return Ok(());
        }
        info!(%kind, ?ruling, "objection ruled");
        self.append_turn(state, Turn::court(ruling_announcement(kind, ruling)));
        self.inner.notifier.on_objection(kind, ruling);

        let mut patch = BattlePatch {
            objections: Some(state.battle.objections()),
            ..Default::default()
        };
        if ruling == Ruling::Sustained {
            state
                .battle
                .apply_score_delta(Category::Clarity, SUSTAINED_CLARITY_BONUS);
            self.inner.notifier.on_scores(state.battle.scores());
            patch.scores = Some(state.battle.scores().clone());
        }
        self.persist(&state.battle.id, patch).await
    }

    /// Move to the next stage, or complete the battle from closing.
    ///
    /// Returns the examination kickoff cue when the new stage is one
    /// the counsel opens.
    async fn advance(&self, state: &mut EngineState) -> Result<Option<CounselCue>, EngineError> {
        if state.battle.stage() == Stage::Closing {
            self.complete(state).await?;
            return Ok(None);
        }
        let Some(next) = state.battle.advance_stage() else {
            return Ok(None);
        };
        state.progress.reset();
        info!(stage = %next, "stage advanced");
        self.append_turn(state, Turn::court(next.transition_announcement()));
        self.inner.notifier.on_stage_changed(next);
        let patch = BattlePatch {
            stage: Some(next),
            ..Default::default()
        };
        self.persist(&state.battle.id, patch).await?;

        Ok(next.is_examination().then(|| CounselCue {
            stage: next,
            argument: counsel::EXAMINATION_KICKOFF.to_string(),
        }))
    }

    async fn complete(&self, state: &mut EngineState) -> Result<(), EngineError> {
        let elapsed = self.elapsed_seconds();
        if !state.battle.complete(elapsed) {
            return Ok(());
        }
        state.progress.reset();
        info!(duration_seconds = elapsed, "battle completed");
        self.append_turn(state, Turn::court(COMPLETION_ANNOUNCEMENT));
        let patch = BattlePatch {
            status: Some(BattleStatus::Completed),
            duration_seconds: Some(elapsed),
            ..Default::default()
        };
        self.persist(&state.battle.id, patch).await?;
        self.inner.notifier.on_completed(&state.battle);
        self.inner.cancel.cancel();
        Ok(())
    }

    /// Record a counsel utterance and count the exchange.
    ///
    /// Returns a kickoff cue when the exchange quota advanced the stage
    /// into an examination.
    async fn record_counsel(
        &self,
        state: &mut EngineState,
        text: String,
    ) -> Result<Option<CounselCue>, EngineError> {
        if state.battle.is_completed() {
            return Ok(None);
        }
        let stage = state.battle.stage();
        state.strategy = derive_strategy(&text);
        self.append_turn(state, Turn::counsel(text));
        self.inner.notifier.on_strategy(&state.strategy);

        let cue =
            if state.progress.observe(stage, StageSignal::CounselExchange) == StageDecision::Advance
            {
                self.advance(state).await?
            } else {
                None
            };

        if self.inner.config.background_tasks
            && state.transcript.len() >= self.inner.config.insight_cadence
            && state.transcript.len() % self.inner.config.insight_cadence == 0
        {
            let engine = self.clone();
            tokio::spawn(async move {
                if let Err(err) = engine.synthesize_insights().await {
                    warn!(error = %err, "periodic insight synthesis failed");
                }
            });
        }
        Ok(cue)
    }

    /// Generate and record counsel replies until the cue chain runs out
    /// (a reply can advance the stage, which can cue a kickoff).
    async fn run_counsel(&self, mut cue: CounselCue) -> Result<(), EngineError> {
        loop {
            let prompt = counsel::reply_prompt(cue.stage, &self.inner.case, &cue.argument);
            let text = match self.inner.oracle.generate(&prompt).await {
                Ok(reply) if !reply.trim().is_empty() => reply.trim().to_string(),
                Ok(_) => counsel::COUNSEL_FALLBACK.to_string(),
                Err(err) => {
                    warn!(error = %err, "counsel reply failed; using fallback");
                    counsel::COUNSEL_FALLBACK.to_string()
                }
            };
            let mut state = self.inner.state.lock().await;
            match self.record_counsel(&mut state, text).await? {
                Some(next) => cue = next,
                None => return Ok(()),
            }
        }
    }

    async fn deliver_counsel(&self, cue: CounselCue) -> Result<(), EngineError> {
        if self.inner.config.synchronous_replies {
            self.run_counsel(cue).await
        } else {
            let engine = self.clone();
            tokio::spawn(async move {
                if let Err(err) = engine.run_counsel(cue).await {
                    warn!(error = %err, "counsel reply chain failed");
                }
            });
            Ok(())
        }
    }

    async fn persist(&self, id: &str, patch: BattlePatch) -> Result<(), EngineError> {
        if patch.is_empty() {
            return Ok(());
        }
        self.inner.repository.update(id, patch).await?;
        Ok(())
    }
}
