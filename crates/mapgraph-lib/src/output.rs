use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId, Position};
use crate::routing::{RouteAlgorithm, RoutePlan};

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    PlainText,
    Markdown,
}

/// Endpoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteEndpoint {
    pub id: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RouteEndpoint {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// Step taken during traversal of a planned route. Positions are carried so
/// an external renderer can draw the highlighted path without touching the
/// graph store again.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub id: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl RouteStep {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// Structured representation of a planned route that higher-level consumers
/// can serialise or render as text.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub hops: usize,
    pub total_weight: f64,
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub steps: Vec<RouteStep>,
    /// Ordered `(source, target)` pairs, the renderer's edge list.
    pub edges: Vec<(NodeId, NodeId)>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a structured summary with resolved node
    /// names and positions.
    pub fn from_plan(graph: &Graph, plan: &RoutePlan) -> Result<Self> {
        if plan.steps.is_empty() {
            return Err(Error::EmptyRoute);
        }

        let steps = plan
            .steps
            .iter()
            .enumerate()
            .map(|(index, node_id)| {
                let node = graph.node(*node_id);
                RouteStep {
                    index,
                    id: *node_id,
                    name: node.map(|node| node.name.clone()),
                    position: node.map(|node| node.position),
                }
            })
            .collect::<Vec<_>>();

        let start = RouteEndpoint {
            id: steps
                .first()
                .map(|step| step.id)
                .expect("validated non-empty steps"),
            name: steps.first().and_then(|step| step.name.clone()),
        };
        let goal = RouteEndpoint {
            id: steps
                .last()
                .map(|step| step.id)
                .expect("validated non-empty steps"),
            name: steps.last().and_then(|step| step.name.clone()),
        };

        Ok(Self {
            algorithm: plan.algorithm,
            hops: plan.hop_count(),
            total_weight: plan.total_weight,
            start,
            goal,
            steps,
            edges: plan.edges.clone(),
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RenderMode) -> String {
        match mode {
            RenderMode::PlainText => self.render_plain(),
            RenderMode::Markdown => self.render_markdown(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops, weight {}, algorithm: {})",
            self.start.display_name(),
            self.goal.display_name(),
            self.hops,
            self.total_weight,
            self.algorithm
        );
        for step in &self.steps {
            let _ = writeln!(buffer, "{:>3}: {} ({})", step.index, step.display_name(), step.id);
        }
        buffer
    }

    fn render_markdown(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route** _{} -> {}_ ({} hops, weight {}, algorithm: `{}`)",
            self.start.display_name(),
            self.goal.display_name(),
            self.hops,
            self.total_weight,
            self.algorithm
        );
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "* {:>2}. **{}** (`{}`)",
                step.index,
                step.display_name(),
                step.id
            );
        }
        buffer
    }
}
