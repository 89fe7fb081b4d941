//! Plan rendering
//!
//! Stateless mapping from a Plan to the message the candidate sees, plus a
//! short diagnostic for the audit log. No session access here.

use crate::planner::{Plan, PlanRoute};

/// Candidate-visible message and the internal note for the log
#[derive(Debug, Clone)]
pub struct RenderedReply {
    pub visible_message: String,
    pub internal_note: &'static str,
}

/// Turn a plan into the visible reply.
pub fn render(plan: &Plan) -> RenderedReply {
    match plan.route {
        PlanRoute::HandleOfftopic => RenderedReply {
            visible_message: format!("Понял! Давай вернемся к интервью. {}", plan.next_question),
            internal_note: "Redirected from off-topic and continued with next question.",
        },
        PlanRoute::HandleHallucination => RenderedReply {
            visible_message: format!(
                "Уточню: сейчас нет подтверждений такому утверждению. \
                 В интервью будем опираться на документацию и проверяемые факты. {}",
                plan.next_question
            ),
            internal_note: "Challenged hallucination politely; resumed interview.",
        },
        PlanRoute::AnswerRoleReversal => {
            // the canned answer is part of the plan; fall back to a generic
            // one so a malformed plan still renders something sensible
            let answer = plan.role_reversal_answer.unwrap_or(
                "Обычно на испытательном дают небольшие фичи/багфиксы и смотрят на качество кода и коммуникацию.",
            );
            RenderedReply {
                visible_message: format!(
                    "{} А теперь вернемся к интервью: {}",
                    answer, plan.next_question
                ),
                internal_note: "Answered candidate question (role reversal) and resumed interview.",
            }
        }
        PlanRoute::NextQuestion => RenderedReply {
            visible_message: plan.next_question.clone(),
            internal_note: "Asked next planned question.",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::EvalLabel;
    use crate::router::RouteFlags;

    fn plan(route: PlanRoute) -> Plan {
        Plan {
            eval: EvalLabel::Unknown,
            coverage: 0.0,
            flags: RouteFlags::default(),
            route,
            difficulty_delta: 0,
            difficulty_now: 1,
            preferred_topic: None,
            next_question: "Чем отличается INNER JOIN от LEFT JOIN?".into(),
            role_reversal_answer: None,
        }
    }

    #[test]
    fn test_plain_route_is_question_verbatim() {
        let reply = render(&plan(PlanRoute::NextQuestion));
        assert_eq!(reply.visible_message, "Чем отличается INNER JOIN от LEFT JOIN?");
    }

    #[test]
    fn test_offtopic_redirects_then_asks() {
        let reply = render(&plan(PlanRoute::HandleOfftopic));
        assert!(reply.visible_message.starts_with("Понял! Давай вернемся к интервью."));
        assert!(reply.visible_message.ends_with("Чем отличается INNER JOIN от LEFT JOIN?"));
    }

    #[test]
    fn test_hallucination_challenges_then_asks() {
        let reply = render(&plan(PlanRoute::HandleHallucination));
        assert!(reply.visible_message.contains("нет подтверждений"));
        assert!(reply.visible_message.ends_with("Чем отличается INNER JOIN от LEFT JOIN?"));
    }

    #[test]
    fn test_role_reversal_answers_then_transitions() {
        let mut p = plan(PlanRoute::AnswerRoleReversal);
        p.role_reversal_answer = Some("Обычно дают небольшие фичи.");
        let reply = render(&p);
        assert!(reply.visible_message.starts_with("Обычно дают небольшие фичи."));
        assert!(reply.visible_message.contains("А теперь вернемся к интервью:"));
    }

    #[test]
    fn test_role_reversal_without_canned_answer_still_renders() {
        let reply = render(&plan(PlanRoute::AnswerRoleReversal));
        assert!(reply.visible_message.contains("А теперь вернемся к интервью:"));
    }
}
