//! Interview Flow: the ordered stages of a position's process.

use hireflow_core::error::{CoreError, Entity};
use hireflow_core::types::DbId;
use hireflow_db::PipelineStore;
use serde::Serialize;

use crate::error::PipelineError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowStep {
    pub id: DbId,
    pub name: String,
    pub order_index: i32,
}

/// A position together with the stages of its interview flow, sorted by
/// `order_index`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionFlow {
    pub position_id: DbId,
    pub position_title: String,
    pub interview_flow_id: DbId,
    pub steps: Vec<FlowStep>,
}

pub async fn interview_flow(
    store: &dyn PipelineStore,
    position_id: DbId,
) -> Result<PositionFlow, PipelineError> {
    let position = store
        .find_position(position_id)
        .await?
        .ok_or(CoreError::not_found(Entity::Position, position_id))?;

    let steps = store
        .list_interview_steps(position.interview_flow_id)
        .await?
        .into_iter()
        .map(|step| FlowStep {
            id: step.id,
            name: step.name,
            order_index: step.order_index,
        })
        .collect();

    Ok(PositionFlow {
        position_id: position.id,
        position_title: position.title,
        interview_flow_id: position.interview_flow_id,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use hireflow_db::models::interview_flow::CreateInterviewStep;
    use hireflow_db::InMemoryPipelineStore;

    use super::*;
    use crate::fixtures;

    #[tokio::test]
    async fn steps_come_back_in_order_index() {
        let store = InMemoryPipelineStore::new();
        let (flow, _) = fixtures::flow(&store, &["Offer"]);
        // Inserted after "Offer" but ordered before it.
        for (name, order_index) in [("Technical", 0), ("Screening", -1)] {
            store
                .insert_interview_step(&CreateInterviewStep {
                    interview_flow_id: flow.id,
                    name: name.to_string(),
                    order_index,
                })
                .unwrap();
        }
        let position = fixtures::position(&store, flow.id, "Designer");

        let result = interview_flow(&store, position.id).await.unwrap();
        assert_eq!(result.position_title, "Designer");
        assert_eq!(result.interview_flow_id, flow.id);
        let names: Vec<&str> = result.steps.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Screening", "Technical", "Offer"]);
    }

    #[tokio::test]
    async fn steps_of_other_flows_are_excluded() {
        let store = InMemoryPipelineStore::new();
        let (flow, _) = fixtures::flow(&store, &["Screening", "Technical"]);
        fixtures::flow(&store, &["Unrelated"]);
        let position = fixtures::position(&store, flow.id, "Backend");

        let result = interview_flow(&store, position.id).await.unwrap();
        assert_eq!(result.steps.len(), 2);
    }

    #[tokio::test]
    async fn unknown_position_is_not_found() {
        let store = InMemoryPipelineStore::new();
        let err = interview_flow(&store, 77).await.unwrap_err();
        assert_matches!(
            err,
            PipelineError::Core(CoreError::NotFound {
                entity: Entity::Position,
                id: 77
            })
        );
    }

    #[test]
    fn flow_serializes_with_camel_case() {
        let flow = PositionFlow {
            position_id: 1,
            position_title: "Backend".to_string(),
            interview_flow_id: 2,
            steps: vec![FlowStep {
                id: 3,
                name: "Screening".to_string(),
                order_index: 1,
            }],
        };
        let json = serde_json::to_value(&flow).unwrap();
        assert_eq!(json["positionTitle"], "Backend");
        assert_eq!(json["interviewFlowId"], 2);
        assert_eq!(json["steps"][0]["orderIndex"], 1);
    }
}
