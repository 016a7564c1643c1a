use chrono::{Duration, Utc};
use tracing::info;

use shoal_types::models::{
    Alert, AlertKind, ChatMessage, Donation, DonationKind, DonationStatus, Severity, Urgency, User,
};

use crate::Store;

/// Install the demonstration data set: a few users, a matched pair of
/// donation listings, active alerts, and a short chat history. Timestamps
/// are backdated relative to startup so the newest-first lists look lived-in.
pub(crate) fn install(store: &Store) {
    let now = Utc::now();

    for (name, email, avatar) in [
        (
            "John Fisher",
            "john@example.com",
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150",
        ),
        (
            "Maria Santos",
            "maria@example.com",
            "https://images.unsplash.com/photo-1494790108755-2616b612b1d4?w=150&h=150",
        ),
        (
            "Ahmed Hassan",
            "ahmed@example.com",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150",
        ),
    ] {
        store.users.insert(|id| User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            avatar: Some(avatar.to_string()),
            role: "user".to_string(),
            created_at: now,
        });
    }

    store.donations.insert(|id| Donation {
        id,
        user_id: 1,
        kind: DonationKind::Donation,
        fish_type: "Fresh Tuna".to_string(),
        quantity: 50,
        location: "Mumbai Port, India".to_string(),
        contact_info: Some("+91 98765 43210".to_string()),
        urgency: Urgency::High,
        description: Some("Fresh catch from today's fishing. Need to distribute quickly.".to_string()),
        status: DonationStatus::Pending,
        matched_with: None,
        created_at: now - Duration::hours(2),
        updated_at: now - Duration::hours(2),
    });
    store.donations.insert(|id| Donation {
        id,
        user_id: 2,
        kind: DonationKind::Request,
        fish_type: "Any fresh fish".to_string(),
        quantity: 30,
        location: "Mumbai Port, India".to_string(),
        contact_info: Some("maria@example.com".to_string()),
        urgency: Urgency::Medium,
        description: Some("Need fish for community kitchen serving 100 families.".to_string()),
        status: DonationStatus::Pending,
        matched_with: None,
        created_at: now - Duration::hours(1),
        updated_at: now - Duration::hours(1),
    });
    store.donations.insert(|id| Donation {
        id,
        user_id: 3,
        kind: DonationKind::Donation,
        fish_type: "Salmon".to_string(),
        quantity: 25,
        location: "Vancouver Port, Canada".to_string(),
        contact_info: Some("+1 604 555 0123".to_string()),
        urgency: Urgency::Low,
        description: Some("Surplus from commercial fishing operation.".to_string()),
        status: DonationStatus::Completed,
        matched_with: None,
        created_at: now - Duration::hours(24),
        updated_at: now - Duration::hours(12),
    });

    store.alerts.insert(|id| Alert {
        id,
        kind: AlertKind::Weather,
        message: "Strong winds expected in Mumbai coastal areas. Wind speeds up to 45 km/h. Avoid fishing until conditions improve.".to_string(),
        severity: Severity::High,
        location: Some("Mumbai Coast, India".to_string()),
        active: true,
        created_at: now - Duration::minutes(30),
    });
    store.alerts.insert(|id| Alert {
        id,
        kind: AlertKind::Info,
        message: "New sustainable fishing guidelines released. Check latest regulations for your area.".to_string(),
        severity: Severity::Low,
        location: None,
        active: true,
        created_at: now - Duration::hours(1),
    });
    store.alerts.insert(|id| Alert {
        id,
        kind: AlertKind::Disaster,
        message: "Tsunami warning lifted for Pacific coastal areas. Normal fishing operations can resume.".to_string(),
        severity: Severity::Medium,
        location: Some("Pacific Coast".to_string()),
        active: true,
        created_at: now - Duration::hours(3),
    });

    store.chat_messages.insert(|id| ChatMessage {
        id,
        user_id: Some(1),
        message: "What's the weather like for fishing today?".to_string(),
        is_user: true,
        language: Some("en".to_string()),
        created_at: now - Duration::minutes(10),
    });
    store.chat_messages.insert(|id| ChatMessage {
        id,
        user_id: Some(1),
        message: "Current weather conditions show moderate winds at 15 km/h from the southwest. Sea conditions are favorable for fishing with wave heights of 1-2 meters.".to_string(),
        is_user: false,
        language: Some("en".to_string()),
        created_at: now - Duration::minutes(9),
    });

    info!("Seeded demonstration data");
}
