use std::ops::RangeInclusive;

use chrono::{Duration, NaiveDateTime, NaiveTime};
use rand::Rng;

use shopgen_core::catalog::DEVICE_WEIGHTS;
use shopgen_core::{Customer, Event, EventType};

use super::CUSTOMER_PARETO_ALPHA;
use crate::errors::GenerationError;
use crate::model::GenerateOptions;
use crate::sampling::{Weighted, pareto_index, uniform_date};

/// One conditional step of a session funnel after the initial page view.
#[derive(Debug, Clone)]
pub struct FunnelStep {
    pub event_type: EventType,
    /// Chance of reaching this step given the previous one happened.
    pub probability: f64,
    /// Minutes after the session start.
    pub offset_minutes: RangeInclusive<i64>,
}

pub const FUNNEL_STEPS: [FunnelStep; 3] = [
    FunnelStep {
        event_type: EventType::AddToCart,
        probability: 0.30,
        offset_minutes: 1..=10,
    },
    FunnelStep {
        event_type: EventType::CheckoutStart,
        probability: 0.50,
        offset_minutes: 11..=20,
    },
    FunnelStep {
        event_type: EventType::Purchase,
        probability: 0.70,
        offset_minutes: 21..=30,
    },
];

/// Generated events plus the number of sessions started.
#[derive(Debug, Clone)]
pub struct EventBatch {
    pub events: Vec<Event>,
    pub sessions: u32,
}

/// Simulate session funnels until `options.events` events exist. The last
/// session is cut short when the cap lands mid-funnel.
pub fn generate_events<R: Rng + ?Sized>(
    options: &GenerateOptions,
    customers: &[Customer],
    rng: &mut R,
) -> Result<EventBatch, GenerationError> {
    if customers.is_empty() {
        return Err(GenerationError::InvalidConfig(
            "events need at least one customer".to_string(),
        ));
    }

    let devices = Weighted::new(DEVICE_WEIGHTS)?;
    let target = options.events;
    let mut events: Vec<Event> = Vec::with_capacity(target);
    let mut sessions = 0_u32;

    'sessions: while events.len() < target {
        sessions += 1;
        let customer_id =
            customers[pareto_index(rng, customers.len(), CUSTOMER_PARETO_ALPHA)].customer_id;
        let device_type = devices.sample(rng);
        let session_id = format!("sess_{sessions:06}");
        let started_at = NaiveDateTime::new(
            uniform_date(rng, options.date_start, options.date_end),
            NaiveTime::MIN,
        );

        let session_event = |index: usize, event_type: EventType, event_date: NaiveDateTime| {
            Event {
                event_id: index as i32 + 1,
                customer_id,
                event_type,
                event_date,
                session_id: session_id.clone(),
                device_type,
            }
        };

        events.push(session_event(events.len(), EventType::PageView, started_at));

        for step in &FUNNEL_STEPS {
            if events.len() >= target || !rng.random_bool(step.probability) {
                continue 'sessions;
            }
            let offset = rng.random_range(step.offset_minutes.clone());
            let event_date = started_at + Duration::minutes(offset);
            events.push(session_event(events.len(), step.event_type, event_date));
        }
    }

    Ok(EventBatch { events, sessions })
}
