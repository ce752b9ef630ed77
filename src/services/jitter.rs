//! Variación aleatoria de telemetría
//!
//! Simula lecturas en vivo perturbando un valor base con ruido uniforme
//! acotado. No es criptográfico; cualquier `Rng` sirve, lo que permite usar
//! generadores con semilla en los tests.

use rand::Rng;

/// Devuelve `round(base * (1 + u))` con `u` uniforme en `[-variation, +variation]`
pub fn add_random_variation<R: Rng>(rng: &mut R, base: f64, variation: f64) -> i64 {
    let variation = variation.abs();
    let u = if variation == 0.0 {
        0.0
    } else {
        rng.gen_range(-variation..=variation)
    };
    (base * (1.0 + u)).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_stays_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let value = add_random_variation(&mut rng, 1000.0, 0.2);
            assert!((800..=1200).contains(&value), "out of range: {}", value);
        }
    }

    #[test]
    fn test_zero_variation_only_rounds() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(add_random_variation(&mut rng, 44.6, 0.0), 45);
        assert_eq!(add_random_variation(&mut rng, 0.0, 0.5), 0);
    }

    #[test]
    fn test_negative_variation_is_treated_as_magnitude() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let value = add_random_variation(&mut rng, 100.0, -0.05);
            assert!((95..=105).contains(&value));
        }
    }

    #[test]
    fn test_values_actually_vary() {
        let mut rng = StdRng::seed_from_u64(11);
        let values: std::collections::HashSet<i64> =
            (0..100).map(|_| add_random_variation(&mut rng, 1247.0, 0.1)).collect();
        assert!(values.len() > 10);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let first: Vec<i64> = (0..20).map(|_| add_random_variation(&mut a, 500.0, 0.1)).collect();
        let second: Vec<i64> = (0..20).map(|_| add_random_variation(&mut b, 500.0, 0.1)).collect();
        assert_eq!(first, second);
    }
}
