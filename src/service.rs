//! PropFlow service: wires the rule engines to storage and the platform gateway.
//!
//! Handlers call into this; it holds no mutable state of its own apart from
//! the shared escalation queue.

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::EngineSettings;
use crate::error::Result;
use crate::escalations::{Escalation, EscalationQueue};
use crate::integrations::PlatformGateway;
use crate::messages::{Disposition, MessageCategory, MessageClassifier, Priority, render_reply};
use crate::opportunities::{Opportunity, OpportunityDetector};
use crate::pricing::{PricingApplier, PricingOutcome};
use crate::properties::{Property, PropertyInfo, PropertyStatus, overall_status, resolve_status};
use crate::stats::{DashboardStats, MagicStats};
use crate::store::PropertyRepository;

/// Reported response latency for auto-replies.
const AUTO_REPLY_SECONDS: f64 = 0.3;

// ── Clock ───────────────────────────────────────────────────────────

/// Source of the current local time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the server's local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to one instant (tests, demos).
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

// ── Results ─────────────────────────────────────────────────────────

/// Everything the dashboard needs in one payload.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub properties: Vec<Property>,
    pub money_opportunity: Option<Opportunity>,
    pub overall_status: PropertyStatus,
    pub total_weekly_revenue: Decimal,
    pub magic_stats: DashboardStats,
}

/// A guest message answered without the host.
#[derive(Debug, Clone, Serialize)]
pub struct AutoReply {
    pub auto_handled: bool,
    pub response_sent: String,
    pub category: MessageCategory,
    pub confidence: f64,
    pub response_time_seconds: f64,
    pub user_message: String,
}

/// A guest message handed to the host.
#[derive(Debug, Clone, Serialize)]
pub struct EscalationNotice {
    pub auto_handled: bool,
    pub escalated_to_human: bool,
    pub escalation_id: Uuid,
    pub escalation_reason: String,
    pub suggested_response: Option<String>,
    pub priority: Priority,
    pub category: MessageCategory,
    pub user_message: String,
}

/// Outcome of handling one guest message.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum GuestMessageOutcome {
    AutoHandled(AutoReply),
    Escalated(EscalationNotice),
}

/// Single-property view.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyDetail {
    pub property: Property,
    pub info: PropertyInfo,
    pub opportunities: Vec<Opportunity>,
    pub open_escalations: usize,
}

// ── Service ─────────────────────────────────────────────────────────

/// Dashboard backend.
pub struct PropFlowService {
    settings: EngineSettings,
    repository: Arc<dyn PropertyRepository>,
    gateway: Arc<dyn PlatformGateway>,
    escalations: Arc<EscalationQueue>,
    clock: Arc<dyn Clock>,
    detector: OpportunityDetector,
    classifier: MessageClassifier,
    pricing: PricingApplier,
}

impl PropFlowService {
    /// Create a service on the wall clock with the default message rules.
    pub fn new(
        settings: EngineSettings,
        repository: Arc<dyn PropertyRepository>,
        gateway: Arc<dyn PlatformGateway>,
    ) -> Self {
        Self {
            detector: OpportunityDetector::new(&settings),
            pricing: PricingApplier::new(&settings),
            classifier: MessageClassifier::default_rules(),
            escalations: EscalationQueue::new(),
            clock: Arc::new(SystemClock),
            settings,
            repository,
            gateway,
        }
    }

    /// Builder: replace the clock.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn escalations(&self) -> &Arc<EscalationQueue> {
        &self.escalations
    }

    /// Host portfolio with derived statuses and the best opportunity.
    pub async fn dashboard(&self, host_id: &str) -> Result<Dashboard> {
        let mut properties = self.repository.properties_for_host(host_id).await?;
        let open = self.escalations.open_counts().await;
        for property in &mut properties {
            let pending = open.get(&property.id).copied().unwrap_or(0);
            apply_open_escalations(property, pending);
        }

        let money_opportunity = self.detector.best(&properties, self.clock.now());
        let total_weekly_revenue = properties.iter().map(|p| p.weekly_revenue).sum();

        debug!(
            host_id = %host_id,
            properties = properties.len(),
            opportunity = money_opportunity.as_ref().map(|o| o.id.as_str()).unwrap_or("none"),
            "Dashboard assembled"
        );

        Ok(Dashboard {
            overall_status: overall_status(&properties),
            properties,
            money_opportunity,
            total_weekly_revenue,
            magic_stats: DashboardStats::default(),
        })
    }

    /// Apply an opportunity's pricing to the given properties.
    pub async fn apply_pricing(
        &self,
        opportunity_id: &str,
        property_ids: &[String],
    ) -> Result<PricingOutcome> {
        let outcome = self
            .pricing
            .apply(
                opportunity_id,
                property_ids,
                self.gateway.as_ref(),
                self.clock.now(),
            )
            .await?;
        Ok(outcome)
    }

    /// Classify a guest message and either answer it or escalate it.
    pub async fn handle_guest_message(
        &self,
        message_id: &str,
        property_id: &str,
        message_text: &str,
    ) -> Result<GuestMessageOutcome> {
        let classification = self.classifier.classify(message_text);
        let category = classification.category;

        let (reason, priority, suggested_response) = match classification.disposition {
            Disposition::AutoRespond { confidence } => {
                let info = self.repository.property_info_or_generic(property_id).await?;
                let reply = render_reply(category, &info);

                if !self.settings.auto_respond_to_common_questions {
                    ("Auto-responses disabled".to_string(), Priority::Medium, Some(reply))
                } else {
                    self.gateway.send_reply(message_id, &reply).await?;
                    info!(
                        message_id = %message_id,
                        property_id = %property_id,
                        category = %category,
                        "Guest message auto-handled"
                    );
                    return Ok(GuestMessageOutcome::AutoHandled(AutoReply {
                        auto_handled: true,
                        response_sent: reply,
                        category,
                        confidence,
                        response_time_seconds: AUTO_REPLY_SECONDS,
                        user_message: format!(
                            "✅ Guest message handled automatically in {AUTO_REPLY_SECONDS} seconds"
                        ),
                    }));
                }
            }
            Disposition::Escalate {
                reason,
                priority,
                suggested_response,
            } => (reason, priority, suggested_response),
        };

        let escalation = Escalation::new(
            message_id,
            property_id,
            message_text,
            category,
            reason,
            priority,
            suggested_response,
        );

        self.gateway
            .notify_host(&escalation.reason, &format!("Guest message {message_id}"))
            .await?;

        let notice = EscalationNotice {
            auto_handled: false,
            escalated_to_human: true,
            escalation_id: escalation.id,
            escalation_reason: escalation.reason.clone(),
            suggested_response: escalation.suggested_response.clone(),
            priority: escalation.priority,
            category: escalation.category,
            user_message: "🤝 Message needs your personal touch - suggested response provided"
                .to_string(),
        };
        self.escalations.push(escalation).await;

        Ok(GuestMessageOutcome::Escalated(notice))
    }

    /// One property with its details and the opportunities that concern it.
    pub async fn property_detail(&self, property_id: &str) -> Result<Option<PropertyDetail>> {
        let Some(mut property) = self.repository.find_property(property_id).await? else {
            return Ok(None);
        };
        let open_escalations = self.escalations.open_for_property(property_id).await;
        apply_open_escalations(&mut property, open_escalations);

        let info = self.repository.property_info_or_generic(property_id).await?;
        let opportunities = self.detector.for_property(&property, self.clock.now());

        Ok(Some(PropertyDetail {
            property,
            info,
            opportunities,
            open_escalations,
        }))
    }

    pub fn magic_stats(&self) -> MagicStats {
        MagicStats::default()
    }
}

/// Count open escalations as unhandled messages, then derive the status.
fn apply_open_escalations(property: &mut Property, open: usize) {
    let open = u32::try_from(open).unwrap_or(u32::MAX);
    property.unhandled_messages = property.unhandled_messages.saturating_add(open);
    property.status = resolve_status(property);
}
