use crate::models::NotificationCount;

/// Cambio a aplicar sobre el badge tras un sondeo
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadgeUpdate {
    Hide,
    Show(String),
}

impl From<NotificationCount> for BadgeUpdate {
    fn from(value: NotificationCount) -> Self {
        if value.count == 0 {
            BadgeUpdate::Hide
        } else {
            BadgeUpdate::Show(value.count.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_hides_and_positive_shows_the_count() {
        assert_eq!(BadgeUpdate::from(NotificationCount { count: 0 }), BadgeUpdate::Hide);
        assert_eq!(
            BadgeUpdate::from(NotificationCount { count: 5 }),
            BadgeUpdate::Show("5".to_string())
        );
    }
}
