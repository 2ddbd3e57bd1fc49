//! City-life toy simulation
//!
//! Three fixed zones with a linear demand/capacity update, a social index
//! driving win/lose, and pollution/tax accumulators. Runs at its own 30 Hz
//! cadence in the same shell as the golf game. Deterministic via seeded PCG.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Round length in seconds
pub const CITY_DURATION_SECS: f32 = 120.0;
/// Social index at or above which the round is won
pub const WIN_SOCIAL_INDEX: i32 = 100;
/// Social index at or below which the round is lost
pub const LOSE_SOCIAL_INDEX: i32 = -100;

/// How much one invest action adds to a zone's capacity
const INVEST_AMOUNT: i32 = 10;
/// Treasury cost of raising every zone's capacity at once
const RAISE_COST: f32 = 20.0;
/// Pollution removed per cleanup action
const CLEAN_AMOUNT: f32 = 10.0;

/// One city zone, fixed set of three per round
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zone {
    pub name: &'static str,
    pub demand: i32,
    pub capacity: i32,
    /// Top-left corner of the zone's card on screen
    pub anchor: Vec2,
}

impl Zone {
    fn new(name: &'static str, demand: i32, capacity: i32, x: f32, y: f32) -> Self {
        Self {
            name,
            demand,
            capacity,
            anchor: Vec2::new(x, y),
        }
    }

    /// Direct investment raises capacity now and drags demand up with it
    fn invest(&mut self, amount: i32) {
        self.capacity += amount;
        self.demand += amount.div_euclid(2);
    }

    /// Linear relaxation of capacity toward demand, with jittered demand
    fn update(&mut self, social_index: i32, rng: &mut Pcg32) {
        let jitter = rng.random_range(-5..=5);
        self.demand = (self.demand + jitter + social_index.div_euclid(10)).max(0);
        self.capacity += (self.demand - self.capacity).div_euclid(10);
    }
}

/// Terminal result of a city round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CityOutcome {
    Won,
    Lost,
}

/// Player actions for one city tick
#[derive(Debug, Clone, Copy, Default)]
pub struct CityInput {
    pub invest_residential: bool,
    pub invest_commercial: bool,
    pub invest_industrial: bool,
    /// Spend treasury to raise every zone's capacity
    pub raise_capacity: bool,
    /// Spend accumulated pollution allowance on a cleanup
    pub clean_pollution: bool,
}

/// Complete city simulation state
#[derive(Debug, Clone)]
pub struct CityState {
    pub zones: [Zone; 3],
    /// Sum of demand minus capacity across zones, recomputed each tick
    pub social_index: i32,
    pub pollution: f32,
    pub tax_income: f32,
    pub time_left: f32,
    pub outcome: Option<CityOutcome>,
    seed: u64,
    rng: Pcg32,
}

impl CityState {
    pub fn new(seed: u64) -> Self {
        Self {
            zones: [
                Zone::new("Residential", 50, 60, 150.0, 150.0),
                Zone::new("Commercial", 70, 80, 500.0, 150.0),
                Zone::new("Industrial", 40, 50, 850.0, 150.0),
            ],
            social_index: 0,
            pollution: 0.0,
            tax_income: 0.0,
            time_left: CITY_DURATION_SECS,
            outcome: None,
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Fresh round with a new seed derived from this one
    pub fn restart(&self) -> Self {
        Self::new(self.seed.wrapping_add(1))
    }

    fn total_capacity(&self) -> i32 {
        self.zones.iter().map(|z| z.capacity).sum()
    }

    fn total_demand(&self) -> i32 {
        self.zones.iter().map(|z| z.demand).sum()
    }
}

/// Advance the city by one tick at the city cadence
pub fn city_tick(state: &mut CityState, input: &CityInput, dt: f32) {
    if state.outcome.is_some() {
        return;
    }

    state.time_left -= dt;
    state.social_index = state.zones.iter().map(|z| z.demand - z.capacity).sum();
    state.pollution += state.total_capacity() as f32 * 0.01;
    state.tax_income += state.total_demand() as f32 * 0.02;

    if state.social_index >= WIN_SOCIAL_INDEX {
        state.outcome = Some(CityOutcome::Won);
        return;
    }
    if state.social_index <= LOSE_SOCIAL_INDEX || state.time_left <= 0.0 {
        state.outcome = Some(CityOutcome::Lost);
        return;
    }

    if input.invest_residential {
        state.zones[0].invest(INVEST_AMOUNT);
    }
    if input.invest_commercial {
        state.zones[1].invest(INVEST_AMOUNT);
    }
    if input.invest_industrial {
        state.zones[2].invest(INVEST_AMOUNT);
    }
    if input.raise_capacity && state.tax_income >= RAISE_COST {
        state.tax_income -= RAISE_COST;
        for zone in &mut state.zones {
            zone.capacity += 5;
        }
    }
    if input.clean_pollution && state.pollution >= CLEAN_AMOUNT {
        state.pollution -= CLEAN_AMOUNT;
    }

    let social_index = state.social_index;
    for zone in &mut state.zones {
        zone.update(social_index, &mut state.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::CITY_DT;

    #[test]
    fn test_initial_layout() {
        let state = CityState::new(7);
        assert_eq!(state.zones[0].name, "Residential");
        assert_eq!(state.zones[0].demand, 50);
        assert_eq!(state.zones[0].capacity, 60);
        assert_eq!(state.zones[2].capacity, 50);
        assert_eq!(state.time_left, CITY_DURATION_SECS);
        assert!(state.outcome.is_none());
    }

    #[test]
    fn test_determinism_under_same_seed() {
        let mut a = CityState::new(42);
        let mut b = CityState::new(42);
        let input = CityInput {
            invest_commercial: true,
            ..Default::default()
        };

        for _ in 0..300 {
            city_tick(&mut a, &input, CITY_DT);
            city_tick(&mut b, &input, CITY_DT);
        }

        assert_eq!(a.zones, b.zones);
        assert_eq!(a.social_index, b.social_index);
        assert_eq!(a.outcome, b.outcome);
    }

    #[test]
    fn test_invest_raises_capacity_and_half_demand() {
        let mut zone = Zone::new("Residential", 50, 60, 0.0, 0.0);
        zone.invest(10);
        assert_eq!(zone.capacity, 70);
        assert_eq!(zone.demand, 55);
    }

    #[test]
    fn test_raise_capacity_needs_treasury() {
        let mut state = CityState::new(1);
        let raise = CityInput {
            raise_capacity: true,
            ..Default::default()
        };

        state.tax_income = 5.0;
        city_tick(&mut state, &raise, CITY_DT);
        let broke_caps: Vec<i32> = state.zones.iter().map(|z| z.capacity).collect();
        assert!(state.tax_income > 5.0 - 0.01, "nothing was spent");

        // Same seed, same jitter; the funded run differs only by the raise.
        // Relaxation can eat at most one point of the +5.
        let mut funded = CityState::new(1);
        funded.tax_income = 50.0;
        city_tick(&mut funded, &raise, CITY_DT);
        // 50 treasury, plus one tick of accrual (160 demand * 0.02), minus
        // the raise cost.
        assert!((funded.tax_income - (50.0 + 3.2 - RAISE_COST)).abs() < 1e-2);
        for (i, zone) in funded.zones.iter().enumerate() {
            assert!(
                zone.capacity >= broke_caps[i] + 4,
                "funded raise must stick (zone {i}: {} vs {})",
                zone.capacity,
                broke_caps[i],
            );
        }
    }

    #[test]
    fn test_clean_pollution_needs_a_stockpile() {
        let mut state = CityState::new(1);
        let clean = CityInput {
            clean_pollution: true,
            ..Default::default()
        };

        state.pollution = 3.0;
        city_tick(&mut state, &clean, CITY_DT);
        assert!(state.pollution > 3.0, "too little to clean, only accrual");

        state.pollution = 30.0;
        let before = state.pollution;
        city_tick(&mut state, &clean, CITY_DT);
        assert!(state.pollution < before - CLEAN_AMOUNT + 3.0);
    }

    #[test]
    fn test_win_on_high_social_index() {
        let mut state = CityState::new(1);
        for zone in &mut state.zones {
            zone.demand = zone.capacity + 40;
        }
        city_tick(&mut state, &CityInput::default(), CITY_DT);
        assert_eq!(state.outcome, Some(CityOutcome::Won));
    }

    #[test]
    fn test_lose_on_low_social_index() {
        let mut state = CityState::new(1);
        for zone in &mut state.zones {
            zone.capacity = zone.demand + 40;
        }
        city_tick(&mut state, &CityInput::default(), CITY_DT);
        assert_eq!(state.outcome, Some(CityOutcome::Lost));
    }

    #[test]
    fn test_timeout_loses() {
        let mut state = CityState::new(1);
        state.time_left = CITY_DT / 2.0;
        city_tick(&mut state, &CityInput::default(), CITY_DT);
        assert_eq!(state.outcome, Some(CityOutcome::Lost));
    }

    #[test]
    fn test_outcome_freezes_the_sim() {
        let mut state = CityState::new(1);
        state.outcome = Some(CityOutcome::Won);
        let snapshot = state.clone();
        city_tick(&mut state, &CityInput::default(), CITY_DT);
        assert_eq!(state.zones, snapshot.zones);
        assert_eq!(state.time_left, snapshot.time_left);
    }

    #[test]
    fn test_restart_reseeds() {
        let state = CityState::new(9);
        let fresh = state.restart();
        assert_eq!(fresh.zones[1].demand, 70);
        assert!(fresh.outcome.is_none());
        assert_eq!(fresh.time_left, CITY_DURATION_SECS);
    }

    #[test]
    fn test_demand_never_goes_negative() {
        // Strongly negative social index pushes demand down every update.
        let mut rng = Pcg32::seed_from_u64(3);
        let mut zone = Zone::new("Industrial", 0, 120, 0.0, 0.0);
        for _ in 0..50 {
            zone.update(-90, &mut rng);
            assert!(zone.demand >= 0);
        }
    }
}
