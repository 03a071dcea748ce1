use crate::{constants::*, error::ErrorCode};
use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct PaywallProfile {
    pub user: Pubkey,
    pub last_paywall_shown_at: Option<i64>,
    pub paywall_show_day: i64, // UTC days since epoch of the last counter reset
    pub paywall_show_count_today: u32,
    pub bump: u8,
}

/// UTC calendar day containing `timestamp`.
pub fn day_index(timestamp: i64) -> i64 {
    timestamp.div_euclid(SECONDS_PER_DAY)
}

impl PaywallProfile {
    /// True once the cooldown since the last presentation has fully elapsed.
    pub fn can_show(&self, now: i64) -> bool {
        match self.last_paywall_shown_at {
            Some(last_shown) => now.saturating_sub(last_shown) >= PAYWALL_COOLDOWN_SECONDS,
            None => true,
        }
    }

    /// Presentations counted for the day containing `now`.
    pub fn shows_today(&self, now: i64) -> u32 {
        if self.paywall_show_day == day_index(now) {
            self.paywall_show_count_today
        } else {
            0
        }
    }

    /// Stamps a presentation at `now`, resetting the counter on a new day.
    pub fn record_shown(&mut self, now: i64) {
        let today = day_index(now);
        if self.paywall_show_day != today {
            self.paywall_show_day = today;
            self.paywall_show_count_today = 0;
        }
        self.paywall_show_count_today = self.paywall_show_count_today.saturating_add(1);
        self.last_paywall_shown_at = Some(now);
    }

    /// Records a presentation to `user`, initializing a fresh profile on first use.
    ///
    /// Every presentation is counted. Returns whether the cooldown had elapsed,
    /// so callers can flag shows that ignored `can_show`.
    pub fn record_presentation(&mut self, user: Pubkey, now: i64, bump: u8) -> Result<bool> {
        require!(user != Pubkey::default(), ErrorCode::UnauthorizedUser);

        if self.user == Pubkey::default() {
            self.user = user;
            self.last_paywall_shown_at = None;
            self.paywall_show_day = day_index(now);
            self.paywall_show_count_today = 0;
            self.bump = bump;
        }
        require!(self.user == user, ErrorCode::UnauthorizedUser);

        let cooldown_elapsed = self.can_show(now);
        self.record_shown(now);
        Ok(cooldown_elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: i64 = 3600;
    const NOW: i64 = 1_760_000_000;

    fn profile(last_paywall_shown_at: Option<i64>) -> PaywallProfile {
        PaywallProfile {
            user: Pubkey::default(),
            last_paywall_shown_at,
            paywall_show_day: 0,
            paywall_show_count_today: 0,
            bump: 0,
        }
    }

    #[test]
    fn never_shown_can_show() {
        assert!(profile(None).can_show(NOW));
    }

    #[test]
    fn cooldown_boundaries() {
        assert!(!profile(Some(NOW - 23 * HOUR)).can_show(NOW));
        assert!(!profile(Some(NOW - PAYWALL_COOLDOWN_SECONDS + 1)).can_show(NOW));
        assert!(profile(Some(NOW - PAYWALL_COOLDOWN_SECONDS)).can_show(NOW));
        assert!(profile(Some(NOW - 25 * HOUR)).can_show(NOW));
    }

    #[test]
    fn shown_in_the_future_blocks() {
        assert!(!profile(Some(NOW + HOUR)).can_show(NOW));
    }

    #[test]
    fn day_index_floors_negative_timestamps() {
        assert_eq!(day_index(0), 0);
        assert_eq!(day_index(SECONDS_PER_DAY - 1), 0);
        assert_eq!(day_index(SECONDS_PER_DAY), 1);
        assert_eq!(day_index(-1), -1);
    }

    #[test]
    fn record_shown_counts_within_a_day() {
        let mut p = profile(None);
        let day_start = day_index(NOW) * SECONDS_PER_DAY;

        p.record_shown(day_start + HOUR);
        p.record_shown(day_start + 2 * HOUR);

        assert_eq!(p.paywall_show_day, day_index(NOW));
        assert_eq!(p.paywall_show_count_today, 2);
        assert_eq!(p.last_paywall_shown_at, Some(day_start + 2 * HOUR));
        assert_eq!(p.shows_today(day_start + 3 * HOUR), 2);
    }

    #[test]
    fn record_shown_resets_on_new_day() {
        let mut p = profile(None);
        let day_start = day_index(NOW) * SECONDS_PER_DAY;

        p.record_shown(day_start + HOUR);
        p.record_shown(day_start + 2 * HOUR);
        p.record_shown(day_start + SECONDS_PER_DAY);

        assert_eq!(p.paywall_show_day, day_index(NOW) + 1);
        assert_eq!(p.paywall_show_count_today, 1);
    }

    #[test]
    fn stale_counter_reads_as_zero() {
        let mut p = profile(None);
        p.record_shown(NOW);
        assert_eq!(p.shows_today(NOW + SECONDS_PER_DAY), 0);
    }

    #[test]
    fn presentations_within_a_day_are_all_counted() {
        let user = Pubkey::new_unique();
        let mut p = profile(None);
        let day_start = day_index(NOW) * SECONDS_PER_DAY;

        assert!(p.record_presentation(user, day_start + HOUR, 7).unwrap());
        assert!(!p.record_presentation(user, day_start + 2 * HOUR, 7).unwrap());

        assert_eq!(p.user, user);
        assert_eq!(p.bump, 7);
        assert_eq!(p.shows_today(day_start + 3 * HOUR), 2);
        assert_eq!(p.last_paywall_shown_at, Some(day_start + 2 * HOUR));
    }

    #[test]
    fn presentations_once_a_minute_keep_counting() {
        let user = Pubkey::new_unique();
        let mut p = profile(None);
        let day_start = day_index(NOW) * SECONDS_PER_DAY;

        for minute in 0..60 {
            p.record_presentation(user, day_start + minute * 60, 0).unwrap();
        }

        assert_eq!(p.shows_today(day_start + HOUR), 60);
    }

    #[test]
    fn presentation_after_cooldown_reports_elapsed_and_resets_day() {
        let user = Pubkey::new_unique();
        let mut p = profile(None);

        p.record_presentation(user, NOW, 0).unwrap();
        let cooldown_elapsed = p
            .record_presentation(user, NOW + PAYWALL_COOLDOWN_SECONDS, 0)
            .unwrap();

        assert!(cooldown_elapsed);
        assert_eq!(p.shows_today(NOW + PAYWALL_COOLDOWN_SECONDS), 1);
    }

    #[test]
    fn presentation_rejects_other_users_profile() {
        let mut p = profile(None);
        p.record_presentation(Pubkey::new_unique(), NOW, 0).unwrap();

        assert_eq!(
            p.record_presentation(Pubkey::new_unique(), NOW + HOUR, 0)
                .unwrap_err(),
            ErrorCode::UnauthorizedUser.into()
        );
        assert_eq!(p.shows_today(NOW), 1);
    }

    #[test]
    fn presentation_rejects_default_user() {
        let mut p = profile(None);
        assert!(p.record_presentation(Pubkey::default(), NOW, 0).is_err());
        assert_eq!(p.last_paywall_shown_at, None);
    }

    #[test]
    fn counter_saturates() {
        let mut p = profile(None);
        p.paywall_show_day = day_index(NOW);
        p.paywall_show_count_today = u32::MAX;
        p.record_shown(NOW);
        assert_eq!(p.paywall_show_count_today, u32::MAX);
    }
}
