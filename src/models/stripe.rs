use serde::{Deserialize, Serialize};

/// Inbound payment-provider event envelope. The `object` payload differs per
/// event type (invoice, customer, charge, ...), so it stays raw JSON until
/// the event type has been matched.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StripeEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: EventData,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EventData {
    pub object: serde_json::Value,
}

/// The `data.object` of an `invoice.payment_succeeded` event. Only the
/// fields the webhook consumes are deserialized.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct InvoiceObject {
    pub customer_email: Option<String>,
    pub amount_paid: i64,
    pub metadata: InvoiceMetadata,
}

/// Metadata attached during checkout session creation.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceMetadata {
    pub user_id: i64,
    pub plan_type: String,
}
