use chrono::Utc;

use shoal_types::api::{
    CreateAlertRequest, CreateDonationRequest, CreateUserRequest, UpdateAlertRequest,
    UpdateDonationRequest, UpdateUserRequest,
};
use shoal_types::models::{
    Alert, ChatMessage, Donation, DonationStatus, Severity, Urgency, User,
};

use crate::{NewChatMessage, Store, StoreError};

impl Store {
    // -- Users --

    pub fn get_user(&self, id: i64) -> Option<User> {
        self.users.get(id)
    }

    /// Linear scan; email uniqueness is a convention, not an enforced
    /// constraint, so this returns the first match in id order.
    pub fn get_user_by_email(&self, email: &str) -> Option<User> {
        self.users.all().into_iter().find(|u| u.email == email)
    }

    pub fn get_users(&self) -> Vec<User> {
        self.users.all()
    }

    pub fn create_user(&self, input: CreateUserRequest) -> User {
        self.users.insert(|id| User {
            id,
            name: input.name,
            email: input.email,
            avatar: input.avatar,
            role: "user".to_string(),
            created_at: Utc::now(),
        })
    }

    pub fn update_user(&self, id: i64, updates: UpdateUserRequest) -> Result<User, StoreError> {
        self.users
            .update(id, |user| {
                if let Some(name) = updates.name {
                    user.name = name;
                }
                if let Some(email) = updates.email {
                    user.email = email;
                }
                if let Some(avatar) = updates.avatar {
                    user.avatar = Some(avatar);
                }
                if let Some(role) = updates.role {
                    user.role = role;
                }
            })
            .ok_or(StoreError::NotFound { entity: "user", id })
    }

    // -- Donations --

    pub fn get_donation(&self, id: i64) -> Option<Donation> {
        self.donations.get(id)
    }

    /// Newest first. Ties on timestamp (seed data, back-to-back creates)
    /// break on id so the order stays consistent with creation order.
    pub fn get_donations(&self) -> Vec<Donation> {
        let mut donations = self.donations.all();
        donations.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        donations
    }

    pub fn get_donations_by_user(&self, user_id: i64) -> Vec<Donation> {
        let mut donations: Vec<Donation> = self
            .donations
            .all()
            .into_iter()
            .filter(|d| d.user_id == user_id)
            .collect();
        donations.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        donations
    }

    pub fn create_donation(&self, input: CreateDonationRequest) -> Donation {
        let now = Utc::now();
        self.donations.insert(|id| Donation {
            id,
            user_id: input.user_id,
            kind: input.kind,
            fish_type: input.fish_type,
            quantity: input.quantity,
            location: input.location,
            contact_info: input.contact_info,
            urgency: input.urgency.unwrap_or(Urgency::Medium),
            description: input.description,
            status: input.status.unwrap_or(DonationStatus::Pending),
            matched_with: input.matched_with,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn update_donation(
        &self,
        id: i64,
        updates: UpdateDonationRequest,
    ) -> Result<Donation, StoreError> {
        self.donations
            .update(id, |donation| {
                if let Some(user_id) = updates.user_id {
                    donation.user_id = user_id;
                }
                if let Some(kind) = updates.kind {
                    donation.kind = kind;
                }
                if let Some(fish_type) = updates.fish_type {
                    donation.fish_type = fish_type;
                }
                if let Some(quantity) = updates.quantity {
                    donation.quantity = quantity;
                }
                if let Some(location) = updates.location {
                    donation.location = location;
                }
                if let Some(contact_info) = updates.contact_info {
                    donation.contact_info = Some(contact_info);
                }
                if let Some(urgency) = updates.urgency {
                    donation.urgency = urgency;
                }
                if let Some(description) = updates.description {
                    donation.description = Some(description);
                }
                if let Some(status) = updates.status {
                    donation.status = status;
                }
                if let Some(matched_with) = updates.matched_with {
                    donation.matched_with = Some(matched_with);
                }
                donation.updated_at = Utc::now();
            })
            .ok_or(StoreError::NotFound {
                entity: "donation",
                id,
            })
    }

    pub fn delete_donation(&self, id: i64) {
        self.donations.remove(id);
    }

    /// Candidate counterparts for a donation: every other pending donation
    /// of the opposite kind in the exact same location. Location matching
    /// is plain string equality — case and whitespace are significant.
    ///
    /// Purely advisory: this never flips `status` to matched and never
    /// writes `matched_with`. Results come back in the default newest-first
    /// donation order, not ranked.
    pub fn match_candidates(&self, donation_id: i64) -> Result<Vec<Donation>, StoreError> {
        let source = self
            .get_donation(donation_id)
            .ok_or(StoreError::NotFound {
                entity: "donation",
                id: donation_id,
            })?;

        let wanted = source.kind.opposite();
        let matches = self
            .get_donations()
            .into_iter()
            .filter(|d| {
                d.kind == wanted
                    && d.location == source.location
                    && d.status == DonationStatus::Pending
                    && d.id != source.id
            })
            .collect();

        Ok(matches)
    }

    // -- Alerts --

    pub fn get_alerts(&self) -> Vec<Alert> {
        let mut alerts = self.alerts.all();
        alerts.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        alerts
    }

    pub fn get_active_alerts(&self) -> Vec<Alert> {
        let mut alerts: Vec<Alert> = self.alerts.all().into_iter().filter(|a| a.active).collect();
        alerts.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        alerts
    }

    pub fn create_alert(&self, input: CreateAlertRequest) -> Alert {
        self.alerts.insert(|id| Alert {
            id,
            kind: input.kind,
            message: input.message,
            severity: input.severity.unwrap_or(Severity::Medium),
            location: input.location,
            active: input.active.unwrap_or(true),
            created_at: Utc::now(),
        })
    }

    pub fn update_alert(&self, id: i64, updates: UpdateAlertRequest) -> Result<Alert, StoreError> {
        self.alerts
            .update(id, |alert| {
                if let Some(kind) = updates.kind {
                    alert.kind = kind;
                }
                if let Some(message) = updates.message {
                    alert.message = message;
                }
                if let Some(severity) = updates.severity {
                    alert.severity = severity;
                }
                if let Some(location) = updates.location {
                    alert.location = Some(location);
                }
                if let Some(active) = updates.active {
                    alert.active = active;
                }
            })
            .ok_or(StoreError::NotFound { entity: "alert", id })
    }

    pub fn delete_alert(&self, id: i64) {
        self.alerts.remove(id);
    }

    // -- Chat --

    /// Oldest first, optionally narrowed to one user's conversation.
    pub fn get_chat_messages(&self, user_id: Option<i64>) -> Vec<ChatMessage> {
        let mut messages: Vec<ChatMessage> = self
            .chat_messages
            .all()
            .into_iter()
            .filter(|m| user_id.is_none() || m.user_id == user_id)
            .collect();
        messages.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        messages
    }

    pub fn create_chat_message(&self, input: NewChatMessage) -> ChatMessage {
        self.chat_messages.insert(|id| ChatMessage {
            id,
            user_id: input.user_id,
            message: input.message,
            is_user: input.is_user,
            language: input.language.or_else(|| Some("en".to_string())),
            created_at: Utc::now(),
        })
    }
}
