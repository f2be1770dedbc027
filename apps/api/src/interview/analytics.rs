//! Progress analytics over a candidate's completed interviews.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::interview::session::InterviewSession;

const RECENT_SESSIONS: usize = 5;

/// One completed interview, reduced to its rounded scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionScore {
    pub session_id: Uuid,
    pub role: String,
    pub completed_at: Option<DateTime<Utc>>,
    pub overall: u32,
    pub technical: u32,
    pub communication: u32,
    pub completeness: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateAnalytics {
    pub candidate_id: Uuid,
    pub total_interviews: usize,
    pub completed_interviews: usize,
    pub average_score: u32,
    pub average_technical: u32,
    pub average_communication: u32,
    pub average_completeness: u32,
    pub strongest_dimension: Option<String>,
    pub weakest_dimension: Option<String>,
    /// Last completed overall minus the first; 0 with fewer than two.
    pub improvement_trend: i64,
    pub recent_performance: Vec<SessionScore>,
}

fn session_score(session: &InterviewSession) -> Option<SessionScore> {
    let summary = session.summary.as_ref()?;
    Some(SessionScore {
        session_id: session.session_id,
        role: session.role.clone(),
        completed_at: session.completed_at,
        overall: summary.overall_score,
        technical: summary.averages.technical.round() as u32,
        communication: summary.averages.communication.round() as u32,
        completeness: summary.averages.completeness.round() as u32,
    })
}

/// Aggregates `sessions` (oldest first). Only completed sessions are scored.
pub fn candidate_analytics(candidate_id: Uuid, sessions: &[InterviewSession]) -> CandidateAnalytics {
    let scores: Vec<SessionScore> = sessions.iter().filter_map(session_score).collect();
    let completed = scores.len();

    let mean = |f: fn(&SessionScore) -> u32| -> u32 {
        if completed == 0 {
            0
        } else {
            (scores.iter().map(|s| f(s) as f64).sum::<f64>() / completed as f64).round() as u32
        }
    };

    let average_technical = mean(|s| s.technical);
    let average_communication = mean(|s| s.communication);
    let average_completeness = mean(|s| s.completeness);

    let (strongest_dimension, weakest_dimension) = if completed == 0 {
        (None, None)
    } else {
        let dimensions = [
            ("Technical", average_technical),
            ("Communication", average_communication),
            ("Completeness", average_completeness),
        ];
        // ties go to the later dimension
        let mut strongest = dimensions[0];
        let mut weakest = dimensions[0];
        for dimension in &dimensions[1..] {
            if dimension.1 >= strongest.1 {
                strongest = *dimension;
            }
            if dimension.1 <= weakest.1 {
                weakest = *dimension;
            }
        }
        (Some(strongest.0.to_string()), Some(weakest.0.to_string()))
    };

    let improvement_trend = match (scores.first(), scores.last()) {
        (Some(first), Some(last)) if completed > 1 => last.overall as i64 - first.overall as i64,
        _ => 0,
    };

    CandidateAnalytics {
        candidate_id,
        total_interviews: sessions.len(),
        completed_interviews: completed,
        average_score: mean(|s| s.overall),
        average_technical,
        average_communication,
        average_completeness,
        strongest_dimension,
        weakest_dimension,
        improvement_trend,
        recent_performance: scores[completed.saturating_sub(RECENT_SESSIONS)..].to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::feedback::{DimensionAverages, InterviewSummary};
    use crate::interview::provider::QuestionSet;

    fn completed(overall: u32, technical: f64, communication: f64, completeness: f64) -> InterviewSession {
        let mut session = InterviewSession::new(
            None,
            "backend",
            QuestionSet {
                questions: Vec::new(),
                source: "static-bank".to_string(),
                confidence: 1.0,
            },
        );
        session.summary = Some(InterviewSummary {
            overall_score: overall,
            answered: 3,
            averages: DimensionAverages {
                technical,
                communication,
                completeness,
            },
            strengths: Vec::new(),
            improvements: Vec::new(),
            summary: "Good".to_string(),
        });
        session.completed_at = Some(Utc::now());
        session
    }

    fn active() -> InterviewSession {
        InterviewSession::new(
            None,
            "backend",
            QuestionSet {
                questions: Vec::new(),
                source: "static-bank".to_string(),
                confidence: 1.0,
            },
        )
    }

    #[test]
    fn test_no_completed_interviews() {
        let analytics = candidate_analytics(Uuid::new_v4(), &[active()]);
        assert_eq!(analytics.total_interviews, 1);
        assert_eq!(analytics.completed_interviews, 0);
        assert_eq!(analytics.average_score, 0);
        assert!(analytics.strongest_dimension.is_none());
        assert_eq!(analytics.improvement_trend, 0);
        assert!(analytics.recent_performance.is_empty());
    }

    #[test]
    fn test_averages_and_dimensions() {
        let sessions = vec![
            completed(60, 50.0, 80.0, 55.4),
            active(),
            completed(80, 70.0, 90.0, 64.6),
        ];
        let analytics = candidate_analytics(Uuid::new_v4(), &sessions);

        assert_eq!(analytics.total_interviews, 3);
        assert_eq!(analytics.completed_interviews, 2);
        assert_eq!(analytics.average_score, 70);
        assert_eq!(analytics.average_technical, 60);
        assert_eq!(analytics.average_communication, 85);
        assert_eq!(analytics.average_completeness, 60);
        assert_eq!(analytics.strongest_dimension.as_deref(), Some("Communication"));
        assert_eq!(analytics.weakest_dimension.as_deref(), Some("Completeness"));
        assert_eq!(analytics.improvement_trend, 20);
    }

    #[test]
    fn test_recent_performance_keeps_last_five() {
        let sessions: Vec<InterviewSession> =
            (0..7).map(|i| completed(50 + i * 5, 60.0, 60.0, 60.0)).collect();
        let analytics = candidate_analytics(Uuid::new_v4(), &sessions);

        assert_eq!(analytics.recent_performance.len(), 5);
        assert_eq!(analytics.recent_performance[0].overall, 60);
        assert_eq!(analytics.improvement_trend, 30);
        assert_eq!(analytics.strongest_dimension.as_deref(), Some("Completeness"));
    }
}
