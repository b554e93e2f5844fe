use serde::{Deserialize, Serialize};

/// Order lifecycle status as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Delivering,
    Delivered,
    Canceled,
}

/// Colour of the status dot in badges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Waiting,
    InProgress,
    Done,
    Stopped,
}

/// A status transition the manager can trigger on a single order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderAction {
    Approve,
    Dispatch,
    Deliver,
    Cancel,
}

/// Controls exposed by one order row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowActions {
    pub forward: Option<OrderAction>,
    pub cancel_enabled: bool,
}

impl OrderStatus {
    /// Wire code ("pending", "processing", ...)
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Delivering => "delivering",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Canceled => "canceled",
        }
    }

    /// Human readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pendente",
            OrderStatus::Processing => "Em processamento",
            OrderStatus::Delivering => "Em entrega",
            OrderStatus::Delivered => "Entregue",
            OrderStatus::Canceled => "Cancelado",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            OrderStatus::Pending => StatusTone::Waiting,
            OrderStatus::Processing | OrderStatus::Delivering => StatusTone::InProgress,
            OrderStatus::Delivered => StatusTone::Done,
            OrderStatus::Canceled => StatusTone::Stopped,
        }
    }

    /// All statuses in the order they appear in the filter select
    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Pending,
            OrderStatus::Canceled,
            OrderStatus::Processing,
            OrderStatus::Delivering,
            OrderStatus::Delivered,
        ]
    }

    /// Parse from wire code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(OrderStatus::Pending),
            "processing" => Some(OrderStatus::Processing),
            "delivering" => Some(OrderStatus::Delivering),
            "delivered" => Some(OrderStatus::Delivered),
            "canceled" => Some(OrderStatus::Canceled),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Canceled)
    }

    /// The single forward step available from this status
    pub fn forward_action(&self) -> Option<OrderAction> {
        match self {
            OrderStatus::Pending => Some(OrderAction::Approve),
            OrderStatus::Processing => Some(OrderAction::Dispatch),
            OrderStatus::Delivering => Some(OrderAction::Deliver),
            OrderStatus::Delivered | OrderStatus::Canceled => None,
        }
    }

    pub fn can_cancel(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Processing)
    }

    pub fn available_actions(&self) -> RowActions {
        RowActions {
            forward: self.forward_action(),
            cancel_enabled: self.can_cancel(),
        }
    }

    /// Whether `action` is legal from this status
    pub fn allows(&self, action: OrderAction) -> bool {
        match action {
            OrderAction::Cancel => self.can_cancel(),
            forward => self.forward_action() == Some(forward),
        }
    }

    /// Whether moving directly to `target` is a legal single step
    pub fn can_transition_to(&self, target: OrderStatus) -> bool {
        if target == OrderStatus::Canceled {
            return self.can_cancel();
        }
        self.forward_action().map(|a| a.target_status()) == Some(target)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl OrderAction {
    pub fn code(&self) -> &'static str {
        match self {
            OrderAction::Approve => "approve",
            OrderAction::Dispatch => "dispatch",
            OrderAction::Deliver => "deliver",
            OrderAction::Cancel => "cancel",
        }
    }

    pub fn target_status(&self) -> OrderStatus {
        match self {
            OrderAction::Approve => OrderStatus::Processing,
            OrderAction::Dispatch => OrderStatus::Delivering,
            OrderAction::Deliver => OrderStatus::Delivered,
            OrderAction::Cancel => OrderStatus::Canceled,
        }
    }

    /// Backend endpoint for this transition (POST)
    pub fn path(&self, order_id: &str) -> String {
        format!("/orders/{}/{}", order_id, self.code())
    }

    /// Button caption
    pub fn label(&self) -> &'static str {
        match self {
            OrderAction::Approve => "Aprovar",
            OrderAction::Dispatch => "Em entrega",
            OrderAction::Deliver => "Entregue",
            OrderAction::Cancel => "Cancelar",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            OrderAction::Approve => "Pedido aprovado.",
            OrderAction::Dispatch => "Pedido saiu para entrega.",
            OrderAction::Deliver => "Pedido entregue.",
            OrderAction::Cancel => "Pedido cancelado.",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            OrderAction::Approve => "Falha ao aprovar o pedido.",
            OrderAction::Dispatch => "Falha ao despachar o pedido.",
            OrderAction::Deliver => "Falha ao marcar o pedido como entregue.",
            OrderAction::Cancel => "Falha ao cancelar o pedido.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_actions_follow_linear_flow() {
        assert_eq!(OrderStatus::Pending.forward_action(), Some(OrderAction::Approve));
        assert_eq!(OrderStatus::Processing.forward_action(), Some(OrderAction::Dispatch));
        assert_eq!(OrderStatus::Delivering.forward_action(), Some(OrderAction::Deliver));
        assert_eq!(OrderStatus::Delivered.forward_action(), None);
        assert_eq!(OrderStatus::Canceled.forward_action(), None);
    }

    #[test]
    fn test_cancel_only_before_dispatch() {
        let cancellable: Vec<_> = OrderStatus::all()
            .into_iter()
            .filter(|s| s.can_cancel())
            .collect();
        assert_eq!(cancellable.len(), 2);
        assert!(cancellable.contains(&OrderStatus::Pending));
        assert!(cancellable.contains(&OrderStatus::Processing));
        assert!(!OrderStatus::Delivering.allows(OrderAction::Cancel));
    }

    #[test]
    fn test_transitions_never_skip_or_go_back() {
        use OrderStatus::*;
        assert!(Pending.can_transition_to(Processing));
        assert!(!Pending.can_transition_to(Delivering));
        assert!(!Delivering.can_transition_to(Processing));
        assert!(!Delivered.can_transition_to(Canceled));
        assert!(!Canceled.can_transition_to(Pending));
        for status in OrderStatus::all() {
            if let Some(action) = status.forward_action() {
                assert!(status.can_transition_to(action.target_status()));
            }
        }
    }

    #[test]
    fn test_terminal_statuses_expose_nothing() {
        for status in [OrderStatus::Delivered, OrderStatus::Canceled] {
            assert!(status.is_terminal());
            assert_eq!(
                status.available_actions(),
                RowActions {
                    forward: None,
                    cancel_enabled: false
                }
            );
        }
    }

    #[test]
    fn test_action_paths_and_labels() {
        assert_eq!(OrderAction::Approve.path("abc-123"), "/orders/abc-123/approve");
        assert_eq!(OrderAction::Cancel.path("abc-123"), "/orders/abc-123/cancel");
        assert_eq!(OrderStatus::Pending.forward_action().map(|a| a.label()), Some("Aprovar"));
        assert_eq!(
            OrderAction::Approve.target_status().forward_action().map(|a| a.label()),
            Some("Em entrega")
        );
    }

    #[test]
    fn test_display_names() {
        assert_eq!(OrderStatus::Processing.display_name(), "Em processamento");
        assert_eq!(OrderStatus::Canceled.display_name(), "Cancelado");
    }

    #[test]
    fn test_wire_codes() {
        let json = serde_json::to_string(&OrderStatus::Delivering).unwrap();
        assert_eq!(json, "\"delivering\"");
        for status in OrderStatus::all() {
            assert_eq!(OrderStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(OrderStatus::from_code("shipped"), None);
    }
}
