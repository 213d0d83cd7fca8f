//! Conversation engine — the per-turn orchestrator.
//!
//! Owns the load → mutate → persist cycle for each session. Every public
//! operation takes a session id, serializes on a per-session lock, and
//! writes the full state back before returning.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::catalog::{self, places};
use crate::config::EngineConfig;
use crate::engine::detect;
use crate::engine::phase::Phase;
use crate::engine::preferences::PreferenceExtractor;
use crate::engine::prompts;
use crate::engine::quiz::QuizOutcome;
use crate::engine::retrieval;
use crate::engine::session::Session;
use crate::error::{EngineError, Error, Result, StoreError};
use crate::llm::{ChatMessage, GenerationRequest, TextGenerator};
use crate::store::SessionStore;

/// What one recommendation-phase turn produced.
#[derive(Debug, Clone)]
pub struct TurnOutput {
    /// The generated conversational reply.
    pub reply: String,
    /// One-time partner block, present only on the committing turn.
    pub partners: Option<String>,
    /// Quiz introduction, present only on the committing turn when a quiz
    /// entry exists for the chosen destination.
    pub quiz_prompt: Option<String>,
    pub phase: Phase,
    pub chosen_place: Option<String>,
}

/// The multi-phase travel conversation engine.
pub struct ConversationEngine {
    store: Arc<dyn SessionStore>,
    generator: Arc<dyn TextGenerator>,
    extractor: PreferenceExtractor,
    config: EngineConfig,
    /// Per-session locks so concurrent turns on one session serialize.
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl ConversationEngine {
    pub fn new(
        store: Arc<dyn SessionStore>,
        generator: Arc<dyn TextGenerator>,
        config: EngineConfig,
    ) -> Self {
        Self {
            store,
            extractor: PreferenceExtractor::new(Arc::clone(&generator)),
            generator,
            config,
            locks: Mutex::new(HashMap::new()),
        }
    }

    async fn lock_for(&self, id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        Arc::clone(locks.entry(id.to_string()).or_default())
    }

    async fn load(&self, id: &str) -> Result<Session> {
        match self.store.get(id).await {
            Ok(session) => Ok(session),
            Err(StoreError::NotFound(id)) => {
                Err(Error::Engine(EngineError::UnknownSession(id)))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, session: &mut Session) -> Result<()> {
        session.updated_at = chrono::Utc::now();
        self.store.put(session).await?;
        Ok(())
    }

    /// Run one generation call over the session transcript and clean the
    /// reply.
    async fn generate_reply(&self, session: &Session, system_prompt: &str) -> Result<String> {
        let messages: Vec<ChatMessage> = session
            .transcript
            .iter()
            .map(|turn| ChatMessage {
                role: turn.role,
                text: turn.text.clone(),
            })
            .collect();
        let response = self
            .generator
            .generate(GenerationRequest::new(messages, system_prompt))
            .await?;
        Ok(prompts::clean_reply(&response.text))
    }

    /// Create a session and produce the opening greeting.
    ///
    /// The greeting instruction is recorded as a user turn, so it counts
    /// toward the extraction threshold like any other turn.
    pub async fn start(&self, id: &str) -> Result<TurnOutput> {
        let lock = self.lock_for(id).await;
        let _guard = lock.lock().await;

        let mut session = Session::new(id);
        session.push_user(prompts::GREETING_INSTRUCTION);
        let reply = self
            .generate_reply(&session, prompts::YASMINE_SYSTEM_PROMPT)
            .await?;
        session.push_model(&reply);
        session.updated_at = chrono::Utc::now();
        self.store.create(&session).await?;

        tracing::info!(session_id = %id, "Session started");
        Ok(TurnOutput {
            reply,
            partners: None,
            quiz_prompt: None,
            phase: session.phase,
            chosen_place: None,
        })
    }

    /// Discard all state for the session and start over.
    pub async fn reset(&self, id: &str) -> Result<TurnOutput> {
        {
            let lock = self.lock_for(id).await;
            let _guard = lock.lock().await;
            self.store.delete(id).await?;
        }
        tracing::info!(session_id = %id, "Session reset");
        self.start(id).await
    }

    /// Advance the recommendation conversation by one user turn.
    pub async fn advance(&self, id: &str, utterance: &str) -> Result<TurnOutput> {
        let lock = self.lock_for(id).await;
        let _guard = lock.lock().await;

        let mut session = self.load(id).await?;
        if session.phase.is_terminal() {
            return Err(EngineError::InvalidPhase(format!(
                "session {id} is committed; use the quiz or Q&A operations, or reset"
            ))
            .into());
        }

        session.push_user(utterance);

        // In the recommending phase, a selecting utterance commits the
        // session before any text is generated.
        let mut just_chose = false;
        if session.phase == Phase::Recommending && session.chosen_place.is_none() {
            if let Some(place) = detect::detect_chosen_place(utterance, &session.recommended_places)
            {
                tracing::info!(session_id = %id, place = %place, "Destination chosen");
                session.chosen_place = Some(place);
                just_chose = true;
            }
        }

        let system_prompt = self.build_system_prompt(&mut session, utterance).await;
        let reply = self.generate_reply(&session, &system_prompt).await?;
        session.push_model(&reply);

        // One-time commitment artifact: partner block plus quiz setup.
        let mut partners = None;
        let mut quiz_prompt = None;
        if just_chose && !session.partners_shown {
            let place = session
                .chosen_place
                .clone()
                .unwrap_or_default();
            partners = catalog::format_partner_block(&place);
            session.partners_shown = true;
            session.phase = Phase::Committed;

            if let Some(entry) = catalog::quiz_for_place(&place) {
                let quiz = crate::engine::quiz::QuizState::from_entry(entry);
                quiz_prompt = Some(quiz.intro());
                session.quiz = Some(quiz);
            }
        }

        self.save(&mut session).await?;

        Ok(TurnOutput {
            reply,
            partners,
            quiz_prompt,
            phase: session.phase,
            chosen_place: session.chosen_place.clone(),
        })
    }

    /// Decide the system prompt for this turn, running extraction and
    /// ranking as side effects on the session.
    async fn build_system_prompt(&self, session: &mut Session, utterance: &str) -> String {
        let base = prompts::YASMINE_SYSTEM_PROMPT;

        // A resuggestion request replaces preferences and candidates from
        // scratch, so corrections in the latest turns take effect.
        if session.recommendations_given
            && session.chosen_place.is_none()
            && detect::is_resuggestion(utterance)
        {
            if let Some(record) = self.extractor.extract(&session.transcript).await {
                tracing::info!(session_id = %session.id, "Resuggestion: preferences re-extracted");
                let context =
                    retrieval::build_retrieval_context(&record, places::all(), self.config.top_n);
                session.recommended_places =
                    retrieval::recommended_names(&record, places::all(), self.config.top_n);
                session.preferences = Some(record);
                return format!("{base}\n\n{context}");
            }
        }

        // First extraction once the turn threshold is reached; retried on
        // every subsequent turn until it succeeds.
        if !session.recommendations_given
            && session.user_turns() >= self.config.extraction_turn_threshold
        {
            if let Some(record) = self.extractor.extract(&session.transcript).await {
                tracing::info!(
                    session_id = %session.id,
                    style = %record.style,
                    "Preferences extracted; entering recommendation"
                );
                let context =
                    retrieval::build_retrieval_context(&record, places::all(), self.config.top_n);
                session.recommended_places =
                    retrieval::recommended_names(&record, places::all(), self.config.top_n);
                session.preferences = Some(record);
                session.recommendations_given = true;
                session.phase = Phase::Recommending;
                return format!("{base}\n\n{context}");
            }
        }

        // Recommendations already on the table: keep the same candidate
        // context in front of the model.
        if session.recommendations_given {
            if let Some(prefs) = &session.preferences {
                let context =
                    retrieval::build_retrieval_context(prefs, places::all(), self.config.top_n);
                return format!("{base}\n\n{context}");
            }
        }

        base.to_string()
    }

    /// Process one quiz turn for a committed session.
    pub async fn quiz_turn(&self, id: &str, utterance: &str) -> Result<String> {
        let lock = self.lock_for(id).await;
        let _guard = lock.lock().await;

        let mut session = self.load(id).await?;
        if session.phase != Phase::Committed {
            return Err(EngineError::InvalidPhase(format!(
                "session {id} has no committed destination yet"
            ))
            .into());
        }

        let chosen = session.chosen_place.clone().unwrap_or_default();
        let Some(quiz) = session.quiz.as_mut() else {
            return Err(EngineError::QuizUnavailable(chosen).into());
        };
        if quiz.outcome != QuizOutcome::Pending {
            return Err(EngineError::QuizResolved.into());
        }

        let mut message = quiz.respond(utterance);
        if quiz.outcome != QuizOutcome::Pending {
            message.push_str(&quiz.summary(&chosen));
        }

        self.save(&mut session).await?;
        Ok(message)
    }

    /// Answer a free-form question after commitment (and after the quiz,
    /// when one exists, is resolved).
    pub async fn qa_turn(&self, id: &str, utterance: &str) -> Result<String> {
        let lock = self.lock_for(id).await;
        let _guard = lock.lock().await;

        let mut session = self.load(id).await?;
        if session.phase != Phase::Committed {
            return Err(EngineError::InvalidPhase(format!(
                "session {id} has no committed destination yet"
            ))
            .into());
        }
        if let Some(quiz) = &session.quiz {
            if quiz.outcome == QuizOutcome::Pending {
                return Err(EngineError::InvalidPhase(format!(
                    "session {id} has an unresolved quiz"
                ))
                .into());
            }
        }

        session
            .qa_transcript
            .push(crate::engine::session::ConversationTurn::user(utterance));

        let messages: Vec<ChatMessage> = session
            .qa_transcript
            .iter()
            .map(|turn| ChatMessage {
                role: turn.role,
                text: turn.text.clone(),
            })
            .collect();
        let response = self
            .generator
            .generate(GenerationRequest::new(messages, prompts::QA_SYSTEM_PROMPT))
            .await?;
        let reply = prompts::clean_reply(&response.text);

        session
            .qa_transcript
            .push(crate::engine::session::ConversationTurn::model(&reply));
        self.save(&mut session).await?;
        Ok(reply)
    }

    /// Read-only snapshot of a session.
    pub async fn inspect(&self, id: &str) -> Result<Session> {
        self.load(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::ScriptedGenerator;
    use crate::store::LibSqlSessionStore;

    const EXTRACTION_JSON: &str = r#"{"style":"beach","companions":"couple","budget":"mid-range","duration_days":5,"interests":["diving"]}"#;

    async fn engine_with(generator: Arc<ScriptedGenerator>) -> ConversationEngine {
        let store = Arc::new(LibSqlSessionStore::new_memory().await.unwrap());
        ConversationEngine::new(store, generator, EngineConfig::default())
    }

    /// Drive a fresh session to the recommending phase: greeting plus four
    /// user turns to reach the threshold of five, with the extraction reply
    /// scripted before the fifth conversational reply.
    async fn reach_recommending(
        engine: &ConversationEngine,
        generator: &ScriptedGenerator,
        id: &str,
    ) -> TurnOutput {
        engine.start(id).await.unwrap();
        for text in ["hi", "beach trip", "with my partner"] {
            engine.advance(id, text).await.unwrap();
        }
        generator.push_reply(EXTRACTION_JSON);
        generator.push_reply("Here are two spots you will love. Which appeals more?");
        engine.advance(id, "about five days, we love diving").await.unwrap()
    }

    #[tokio::test]
    async fn start_generates_a_greeting_turn() {
        let generator = Arc::new(ScriptedGenerator::new(["Salam! I'm Yasmine."]));
        let engine = engine_with(Arc::clone(&generator)).await;

        let output = engine.start("s-1").await.unwrap();
        assert_eq!(output.reply, "Salam! I'm Yasmine.");
        assert_eq!(output.phase, Phase::Collecting);

        let session = engine.inspect("s-1").await.unwrap();
        assert_eq!(session.user_turns(), 1);
        assert_eq!(session.transcript.len(), 2);
    }

    #[tokio::test]
    async fn advance_on_unknown_session_errors() {
        let generator = Arc::new(ScriptedGenerator::new(Vec::<String>::new()));
        let engine = engine_with(generator).await;
        match engine.advance("ghost", "hello").await {
            Err(Error::Engine(EngineError::UnknownSession(id))) => assert_eq!(id, "ghost"),
            other => panic!("expected UnknownSession, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn fifth_user_turn_triggers_extraction_and_recommending() {
        let generator = Arc::new(ScriptedGenerator::new(["greeting", "r1", "r2", "r3"]));
        let engine = engine_with(Arc::clone(&generator)).await;

        let output = reach_recommending(&engine, &generator, "s-1").await;
        assert_eq!(output.phase, Phase::Recommending);

        let session = engine.inspect("s-1").await.unwrap();
        assert!(session.recommendations_given);
        assert_eq!(session.recommended_places.len(), 2);
        assert_eq!(session.preferences.as_ref().unwrap().style, "beach");

        // The reply call after extraction carried the candidate context.
        let request = generator.last_request().unwrap();
        assert!(request.system_instruction.contains("RETRIEVED PLACE PROFILES"));
    }

    #[tokio::test]
    async fn failed_extraction_keeps_collecting_and_retries() {
        let generator = Arc::new(ScriptedGenerator::new(["greeting", "r1", "r2", "r3"]));
        let engine = engine_with(Arc::clone(&generator)).await;

        engine.start("s-1").await.unwrap();
        for text in ["hi", "beach trip", "with my partner"] {
            engine.advance("s-1", text).await.unwrap();
        }

        // Fifth user turn: extraction returns prose, so it fails.
        generator.push_reply("sorry, I cannot say");
        generator.push_reply("tell me more!");
        let output = engine.advance("s-1", "five days or so").await.unwrap();
        assert_eq!(output.phase, Phase::Collecting);
        assert!(!engine.inspect("s-1").await.unwrap().recommendations_given);

        // Sixth turn: extraction is attempted again and succeeds.
        generator.push_reply(EXTRACTION_JSON);
        generator.push_reply("two great options for you");
        let output = engine.advance("s-1", "we love diving").await.unwrap();
        assert_eq!(output.phase, Phase::Recommending);
    }

    #[tokio::test]
    async fn choosing_second_option_commits_with_one_time_artifacts() {
        let generator = Arc::new(ScriptedGenerator::new(["greeting", "r1", "r2", "r3"]));
        let engine = engine_with(Arc::clone(&generator)).await;

        reach_recommending(&engine, &generator, "s-1").await;
        let second = engine.inspect("s-1").await.unwrap().recommended_places[1].clone();

        generator.push_reply("Wonderful choice, enjoy your trip!");
        let output = engine.advance("s-1", "the second one please").await.unwrap();

        assert_eq!(output.phase, Phase::Committed);
        assert_eq!(output.chosen_place.as_deref(), Some(second.as_str()));
        let partners = output.partners.expect("partner block on committing turn");
        assert!(partners.contains("WHERE TO STAY & WHERE TO EAT"));
        assert!(output.quiz_prompt.unwrap().contains("QUIZ TIME!"));

        let session = engine.inspect("s-1").await.unwrap();
        assert!(session.partners_shown);
        assert!(session.quiz.is_some());
    }

    #[tokio::test]
    async fn advance_after_commit_is_rejected() {
        let generator = Arc::new(ScriptedGenerator::new(["greeting", "r1", "r2", "r3"]));
        let engine = engine_with(Arc::clone(&generator)).await;

        reach_recommending(&engine, &generator, "s-1").await;
        generator.push_reply("Enjoy!");
        engine.advance("s-1", "the first one").await.unwrap();

        match engine.advance("s-1", "actually, about that...").await {
            Err(Error::Engine(EngineError::InvalidPhase(_))) => {}
            other => panic!("expected InvalidPhase, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn resuggestion_replaces_preferences_and_candidates() {
        let generator = Arc::new(ScriptedGenerator::new(["greeting", "r1", "r2", "r3"]));
        let engine = engine_with(Arc::clone(&generator)).await;

        reach_recommending(&engine, &generator, "s-1").await;
        let before = engine.inspect("s-1").await.unwrap();
        assert_eq!(before.preferences.as_ref().unwrap().style, "beach");

        // The resuggestion turn re-extracts; the new record replaces the
        // old one wholesale.
        generator.push_reply(
            r#"{"style":"history","companions":"couple","budget":"mid-range","duration_days":5,"interests":["roman ruins"]}"#,
        );
        generator.push_reply("How about these instead?");
        let output = engine
            .advance("s-1", "hmm, can you suggest something else? more history")
            .await
            .unwrap();
        assert_eq!(output.phase, Phase::Recommending);

        let after = engine.inspect("s-1").await.unwrap();
        assert_eq!(after.preferences.as_ref().unwrap().style, "history");
        assert_ne!(after.recommended_places, before.recommended_places);
        assert!(after.chosen_place.is_none());
    }

    #[tokio::test]
    async fn quiz_turn_requires_commitment() {
        let generator = Arc::new(ScriptedGenerator::new(["greeting"]));
        let engine = engine_with(generator).await;
        engine.start("s-1").await.unwrap();

        match engine.quiz_turn("s-1", "camel").await {
            Err(Error::Engine(EngineError::InvalidPhase(_))) => {}
            other => panic!("expected InvalidPhase, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn quiz_resolves_and_then_rejects_further_turns() {
        let generator = Arc::new(ScriptedGenerator::new(["greeting", "r1", "r2", "r3"]));
        let engine = engine_with(Arc::clone(&generator)).await;

        reach_recommending(&engine, &generator, "s-1").await;
        generator.push_reply("Enjoy!");
        engine.advance("s-1", "the first one").await.unwrap();

        let answer = engine
            .inspect("s-1")
            .await
            .unwrap()
            .quiz
            .unwrap()
            .correct_answer;
        let message = engine.quiz_turn("s-1", &answer).await.unwrap();
        assert!(message.contains("Correct!"));
        assert!(message.contains("QUIZ RESULT"));

        match engine.quiz_turn("s-1", "anything").await {
            Err(Error::Engine(EngineError::QuizResolved)) => {}
            other => panic!("expected QuizResolved, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn qa_gated_until_quiz_resolved_then_uses_expert_prompt() {
        let generator = Arc::new(ScriptedGenerator::new(["greeting", "r1", "r2", "r3"]));
        let engine = engine_with(Arc::clone(&generator)).await;

        // Before commitment: rejected.
        engine.start("s-2").await.unwrap();
        assert!(engine.qa_turn("s-2", "what currency?").await.is_err());

        reach_recommending(&engine, &generator, "s-1").await;
        generator.push_reply("Enjoy!");
        engine.advance("s-1", "the first one").await.unwrap();

        // Quiz pending: still rejected.
        assert!(engine.qa_turn("s-1", "what currency?").await.is_err());

        let answer = engine
            .inspect("s-1")
            .await
            .unwrap()
            .quiz
            .unwrap()
            .correct_answer;
        engine.quiz_turn("s-1", &answer).await.unwrap();

        generator.push_reply("The Tunisian dinar.");
        let reply = engine.qa_turn("s-1", "what currency is used?").await.unwrap();
        assert_eq!(reply, "The Tunisian dinar.");

        let request = generator.last_request().unwrap();
        assert!(request.system_instruction.contains("Tunisia travel expert"));
        assert_eq!(engine.inspect("s-1").await.unwrap().qa_transcript.len(), 2);
    }

    #[tokio::test]
    async fn reset_discards_all_state() {
        let generator = Arc::new(ScriptedGenerator::new(["greeting", "r1", "r2", "r3"]));
        let engine = engine_with(Arc::clone(&generator)).await;

        reach_recommending(&engine, &generator, "s-1").await;
        generator.push_reply("Enjoy!");
        engine.advance("s-1", "the first one").await.unwrap();

        generator.push_reply("Salam again!");
        let output = engine.reset("s-1").await.unwrap();
        assert_eq!(output.phase, Phase::Collecting);

        let session = engine.inspect("s-1").await.unwrap();
        assert!(session.chosen_place.is_none());
        assert!(session.quiz.is_none());
        assert_eq!(session.user_turns(), 1);
    }
}
