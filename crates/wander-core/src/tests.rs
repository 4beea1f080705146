//! Unit tests for wander-core primitives.

#[cfg(test)]
mod ids {
    use std::collections::HashMap;

    use crate::{Address, AgentName};

    #[test]
    fn display_is_bare_key() {
        assert_eq!(Address::from("u").to_string(), "u");
        assert_eq!(AgentName::from("Bob").to_string(), "Bob");
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(Address::from("u") < Address::from("v"));
        assert!(AgentName::from("Alice") < AgentName::from("Bob"));
    }

    #[test]
    fn maps_are_queryable_by_str() {
        let mut m: HashMap<Address, u8> = HashMap::new();
        m.insert(Address::from("u"), 1);
        assert_eq!(m.get("u"), Some(&1));
        assert_eq!(m.get("v"), None);
    }

    #[test]
    fn string_roundtrip() {
        let a = Address::from(String::from("waypoint-7"));
        assert_eq!(a.as_str(), "waypoint-7");
    }
}

#[cfg(test)]
mod cost {
    use crate::is_valid_cost;

    #[test]
    fn accepts_ordinary_costs() {
        assert!(is_valid_cost(0.0));
        assert!(is_valid_cost(0.2));
        assert!(is_valid_cost(1e9));
    }

    #[test]
    fn rejects_negative_nan_and_infinite() {
        assert!(!is_valid_cost(-0.1));
        assert!(!is_valid_cost(f64::NAN));
        assert!(!is_valid_cost(f64::INFINITY));
        assert!(!is_valid_cost(f64::NEG_INFINITY));
    }
}

#[cfg(test)]
mod rng {
    use crate::WanderRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = WanderRng::new(42);
        let mut b = WanderRng::new(42);
        for _ in 0..32 {
            assert_eq!(a.gen_range(0..1000u32), b.gen_range(0..1000u32));
        }
    }

    #[test]
    fn choose_on_empty_is_none() {
        let mut rng = WanderRng::new(7);
        let empty: [u8; 0] = [];
        assert_eq!(rng.choose(&empty), None);
    }

    #[test]
    fn rng_is_debug_printable() {
        // Types embedding WanderRng derive Debug, so it must stay Debug too.
        let rng = WanderRng::new(42);
        assert!(!format!("{rng:?}").is_empty());
    }

    #[test]
    fn choose_stays_in_bounds() {
        let mut rng = WanderRng::new(7);
        let items = ["u", "v", "w"];
        for _ in 0..64 {
            let picked = rng.choose(&items).unwrap();
            assert!(items.contains(picked));
        }
    }
}
