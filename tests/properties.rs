//! Property-based tests for booking and discovery invariants.
//!
//! Uses proptest for generative testing with random inputs.

use proptest::prelude::*;

use shift_buddy::domain::booking::{Booking, BookingError, NewBooking, NewMilestone};
use shift_buddy::domain::discovery::{
    recommend_buddies, search_localities, BudgetCeiling, BuddyCatalog, BuddyRecommendation,
    Locality, LocalityCatalog, LocalityQuery, RecommendationCriteria, Zone, MAX_RECOMMENDATIONS,
};
use shift_buddy::domain::foundation::{
    Amount, BookingStatus, BuddyId, FinderId, LocalityId, MilestoneStatus, StarRating, Timestamp,
};

// ============================================================================
// Fixtures
// ============================================================================

fn booked_at() -> Timestamp {
    Timestamp::from_ymd(2024, 12, 1).unwrap()
}

fn pending_booking() -> Booking {
    Booking::create_at(
        NewBooking {
            finder_id: FinderId::new("finder-1").unwrap(),
            finder_name: "Amit Kumar".to_string(),
            buddy_id: BuddyId::new("1").unwrap(),
            buddy_name: "Rahul Sharma".to_string(),
            service: "House Hunting".to_string(),
            amount: 3000,
            move_date: booked_at().plus_days(10),
        },
        booked_at(),
    )
    .unwrap()
}

fn legal_edge(from: BookingStatus, to: BookingStatus) -> bool {
    use BookingStatus::*;
    matches!(
        (from, to),
        (Pending, Accepted)
            | (Pending, Cancelled)
            | (Accepted, InProgress)
            | (InProgress, Completed)
            | (InProgress, Cancelled)
    )
}

fn assert_milestone_invariants(booking: &Booking) -> Result<(), TestCaseError> {
    for m in booking.milestones() {
        prop_assert_eq!(
            m.completed_date().is_some(),
            m.status() == MilestoneStatus::Completed
        );
    }
    let progress = booking.progress();
    let ratio = progress.ratio();
    prop_assert!((0.0..=1.0).contains(&ratio));
    if booking.milestones().is_empty() {
        prop_assert_eq!(ratio, 0.0);
    }
    let all_done = !booking.milestones().is_empty()
        && booking.milestones().iter().all(|m| m.is_completed());
    prop_assert_eq!(ratio == 1.0, all_done);
    Ok(())
}

#[derive(Debug, Clone)]
enum MilestoneOp {
    Add,
    Start(usize),
    Complete(usize),
    Transition(BookingStatus),
}

fn status_strategy() -> impl Strategy<Value = BookingStatus> {
    prop::sample::select(BookingStatus::ALL.to_vec())
}

fn milestone_op() -> impl Strategy<Value = MilestoneOp> {
    prop_oneof![
        3 => Just(MilestoneOp::Add),
        2 => (0usize..8).prop_map(MilestoneOp::Start),
        3 => (0usize..8).prop_map(MilestoneOp::Complete),
        1 => status_strategy().prop_map(MilestoneOp::Transition),
    ]
}

fn buddy_strategy() -> impl Strategy<Value = (String, u8, u64, Vec<String>)> {
    (
        prop::sample::select(vec!["Delhi", "Mumbai", "Bangalore"]).prop_map(String::from),
        0u8..=50,
        0u64..6000,
        prop::sample::subsequence(vec!["English", "Hindi", "Tamil", "Punjabi"], 0..=4)
            .prop_map(|langs| langs.into_iter().map(String::from).collect::<Vec<String>>()),
    )
}

fn buddy_catalog(raw: Vec<(String, u8, u64, Vec<String>)>) -> BuddyCatalog {
    let buddies = raw
        .into_iter()
        .enumerate()
        .map(|(i, (city, rating, price, languages))| BuddyRecommendation {
            id: BuddyId::new(format!("b{}", i)).unwrap(),
            name: format!("Buddy {}", i),
            city,
            specialization: "Local Expert".to_string(),
            rating: StarRating::try_new(f32::from(rating) / 10.0).unwrap(),
            reviews: 0,
            starting_price: Amount::new(price),
            languages,
        })
        .collect();
    BuddyCatalog::new(buddies).unwrap()
}

fn locality_catalog(raw: Vec<(bool, bool, usize)>) -> LocalityCatalog {
    let zones = Zone::all();
    let localities = raw
        .into_iter()
        .enumerate()
        .map(|(i, (popular, metro, zone))| {
            let zone = zones[zone % zones.len()];
            Locality {
                id: LocalityId::new(format!("loc-{}", i)).unwrap(),
                name: format!("Locality {}", i),
                zone,
                district: zone.region_name().to_string(),
                avg_rent: None,
                postal_codes: vec![format!("1100{:02}", i % 100)],
                popular,
                amenities: vec![],
                metro_connectivity: metro,
            }
        })
        .collect();
    LocalityCatalog::new(localities).unwrap()
}

// ============================================================================
// Booking invariants
// ============================================================================

proptest! {
    #[test]
    fn status_only_moves_along_table(targets in prop::collection::vec(status_strategy(), 0..12)) {
        let mut booking = pending_booking();
        for target in targets {
            let from = booking.status();
            match booking.transition(target) {
                Ok(next) => {
                    prop_assert!(legal_edge(from, target));
                    prop_assert_eq!(next.status(), target);
                    booking = next;
                }
                Err(BookingError::InvalidTransition { from: f, to }) => {
                    prop_assert!(!legal_edge(from, target));
                    prop_assert_eq!(f, from);
                    prop_assert_eq!(to, target);
                    prop_assert_eq!(booking.status(), from);
                }
                Err(other) => prop_assert!(false, "unexpected error {:?}", other),
            }
        }
    }

    #[test]
    fn milestone_invariants_hold_under_any_sequence(ops in prop::collection::vec(milestone_op(), 0..30)) {
        let mut booking = pending_booking().accept().unwrap().start().unwrap();
        for op in ops {
            let before = booking.clone();
            let result = match op {
                MilestoneOp::Add => booking.add_milestone(NewMilestone::new("Step", "")),
                MilestoneOp::Start(i) => match booking.milestones().get(i) {
                    Some(m) => booking.start_milestone(m.id()),
                    None => continue,
                },
                MilestoneOp::Complete(i) => match booking.milestones().get(i) {
                    Some(m) => booking.complete_milestone(m.id()),
                    None => continue,
                },
                MilestoneOp::Transition(target) => booking.transition(target),
            };
            match result {
                Ok(next) => booking = next,
                // Failure leaves the original value as it was.
                Err(_) => prop_assert_eq!(&booking, &before),
            }
            assert_milestone_invariants(&booking)?;
        }
    }

    #[test]
    fn completing_twice_matches_completing_once(count in 1usize..6, pick in 0usize..6) {
        let mut booking = pending_booking().accept().unwrap().start().unwrap();
        for i in 0..count {
            booking = booking.add_milestone(NewMilestone::new(format!("Step {}", i), "")).unwrap();
        }
        let id = booking.milestones()[pick % count].id();

        let once = booking.complete_milestone(id).unwrap();
        let twice = once.complete_milestone(id);

        prop_assert_eq!(twice, Err(BookingError::AlreadyCompleted(id)));
        prop_assert_eq!(once.progress().completed_count(), 1);
    }

    #[test]
    fn negative_amounts_never_create(amount in i64::MIN..0) {
        let new = NewBooking {
            finder_id: FinderId::new("f").unwrap(),
            finder_name: "F".to_string(),
            buddy_id: BuddyId::new("b").unwrap(),
            buddy_name: "B".to_string(),
            service: "House Hunting".to_string(),
            amount,
            move_date: booked_at().plus_days(1),
        };
        let is_invalid_input = matches!(
            Booking::create_at(new, booked_at()),
            Err(BookingError::InvalidInput { .. })
        );
        prop_assert!(is_invalid_input);
    }
}

// ============================================================================
// Discovery invariants
// ============================================================================

proptest! {
    #[test]
    fn recommendations_are_bounded_filtered_and_sorted(
        raw in prop::collection::vec(buddy_strategy(), 0..25),
        city in prop::option::of(prop::sample::select(vec!["delhi", "MUMBAI", "Pune"])),
        budget in prop::option::of(0u64..6000),
        language in prop::option::of(prop::sample::select(vec!["hindi", "Tamil", "French"])),
    ) {
        let catalog = buddy_catalog(raw);
        let mut criteria = RecommendationCriteria::new();
        if let Some(city) = city {
            criteria = criteria.city(city);
        }
        if let Some(max) = budget {
            criteria = criteria.max_budget(Amount::new(max));
        }
        if let Some(language) = language {
            criteria = criteria.language(language);
        }

        let results = recommend_buddies(&catalog, &criteria);
        prop_assert!(results.len() <= MAX_RECOMMENDATIONS);

        for buddy in &results {
            if let Some(city) = city {
                prop_assert!(buddy.city.eq_ignore_ascii_case(city));
            }
            if let Some(max) = budget {
                prop_assert!(buddy.starting_price <= Amount::new(max));
            }
            if let Some(language) = language {
                prop_assert!(buddy.languages.iter().any(|l| l.eq_ignore_ascii_case(language)));
            }
        }
        for pair in results.windows(2) {
            prop_assert!(pair[0].rating >= pair[1].rating);
        }

        let matching = catalog.iter().filter(|b| criteria.matches(b)).count();
        prop_assert_eq!(results.len(), matching.min(MAX_RECOMMENDATIONS));
    }

    #[test]
    fn metro_only_never_returns_unconnected(
        raw in prop::collection::vec((any::<bool>(), any::<bool>(), 0usize..10), 0..40),
        popular_first in any::<bool>(),
    ) {
        let catalog = locality_catalog(raw);
        let query = LocalityQuery::new().metro_only(true).popular_first(popular_first);
        let results = search_localities(&catalog, &query);

        prop_assert!(results.iter().all(|l| l.metro_connectivity));
        prop_assert_eq!(results.len(), catalog.metro_connected().len());
    }

    #[test]
    fn popular_first_is_a_stable_partition(
        raw in prop::collection::vec((any::<bool>(), any::<bool>(), 0usize..10), 0..40),
    ) {
        let catalog = locality_catalog(raw);
        let results = search_localities(&catalog, &LocalityQuery::new().popular_first(true));

        let split = results.iter().take_while(|l| l.popular).count();
        prop_assert!(results[split..].iter().all(|l| !l.popular));

        let expected: Vec<_> = catalog
            .iter()
            .filter(|l| l.popular)
            .chain(catalog.iter().filter(|l| !l.popular))
            .map(|l| l.id.clone())
            .collect();
        let actual: Vec<_> = results.iter().map(|l| l.id.clone()).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn lenient_budget_parse_never_panics(text in ".{0,40}") {
        if let Some(BudgetCeiling::UpTo(_)) = BudgetCeiling::parse_lenient(&text) {
            prop_assert!(!text.contains('+'));
        }
    }
}
