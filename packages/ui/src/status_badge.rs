use dioxus::prelude::*;
use store::CampaignStatus;

/// Human label for a status: first letter upper-cased, the rest as sent.
pub fn status_label(status: &CampaignStatus) -> String {
    let raw = status.as_str();
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[component]
pub fn StatusBadge(status: CampaignStatus) -> Element {
    rsx! {
        span {
            class: status.badge_class(),
            "{status_label(&status)}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_label() {
        assert_eq!(status_label(&CampaignStatus::Active), "Active");
        assert_eq!(status_label(&CampaignStatus::WaitingForFunds), "Waiting for funds");
        assert_eq!(status_label(&CampaignStatus::Other(String::new())), "");
    }
}
