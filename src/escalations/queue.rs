//! Escalation queue: in-memory list of guest messages waiting on the host.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::messages::{MessageCategory, Priority};

/// Whether the host has dealt with an escalation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscalationStatus {
    Open,
    Resolved,
}

/// A guest message handed to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Escalation {
    pub id: Uuid,
    pub message_id: String,
    pub property_id: String,
    pub message_text: String,
    pub category: MessageCategory,
    pub reason: String,
    pub priority: Priority,
    pub suggested_response: Option<String>,
    pub status: EscalationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Escalation {
    /// Build an open escalation.
    pub fn new(
        message_id: impl Into<String>,
        property_id: impl Into<String>,
        message_text: impl Into<String>,
        category: MessageCategory,
        reason: impl Into<String>,
        priority: Priority,
        suggested_response: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            message_id: message_id.into(),
            property_id: property_id.into(),
            message_text: message_text.into(),
            category,
            reason: reason.into(),
            priority,
            suggested_response,
            status: EscalationStatus::Open,
            created_at: now,
            updated_at: now,
        }
    }
}

/// In-memory escalation queue shared by all request handlers.
///
/// Only open escalations are held; resolving one removes it. Open entries
/// stay until the host resolves them.
pub struct EscalationQueue {
    items: RwLock<VecDeque<Escalation>>,
}

impl EscalationQueue {
    /// Create an empty queue.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            items: RwLock::new(VecDeque::new()),
        })
    }

    /// Add an escalation at the back of the queue.
    pub async fn push(&self, escalation: Escalation) {
        info!(
            escalation_id = %escalation.id,
            message_id = %escalation.message_id,
            property_id = %escalation.property_id,
            priority = %escalation.priority,
            "Message escalated to host"
        );
        self.items.write().await.push_back(escalation);
    }

    /// Open escalations, oldest first.
    pub async fn open(&self) -> Vec<Escalation> {
        self.items.read().await.iter().cloned().collect()
    }

    /// Open escalations for one property.
    pub async fn open_for_property(&self, property_id: &str) -> usize {
        self.items
            .read()
            .await
            .iter()
            .filter(|e| e.property_id == property_id)
            .count()
    }

    /// Open escalation count per property id.
    pub async fn open_counts(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for escalation in self.items.read().await.iter() {
            *counts.entry(escalation.property_id.clone()).or_insert(0) += 1;
        }
        counts
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    /// Resolve an open escalation and drop it from the queue.
    pub async fn resolve(&self, id: Uuid) -> Option<Escalation> {
        let mut items = self.items.write().await;
        let Some(pos) = items.iter().position(|e| e.id == id) else {
            debug!(escalation_id = %id, "Escalation not found or already resolved");
            return None;
        };

        let mut escalation = items.remove(pos)?;
        escalation.status = EscalationStatus::Resolved;
        escalation.updated_at = Utc::now();
        info!(escalation_id = %id, remaining = items.len(), "Escalation resolved");
        Some(escalation)
    }
}
