//! Raw ADC sample scaling

/// Full scale of the headset's signed 16-bit ADC
pub const MAX_ADC: f32 = 32768.0;

/// Estimated microvolt ceiling attainable with an on-scalp EEG electrode
pub const DEFAULT_MAX_MICROVOLTS: f32 = 100.0;

/// Convert a raw ADC reading to microvolts by linear scaling.
///
/// `uV = (adc / 32768) * max_microvolts`
pub fn adc_to_microvolts(adc: i16, max_microvolts: f32) -> f32 {
    (adc as f32 / MAX_ADC) * max_microvolts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_scale_maps_to_half_ceiling() {
        assert_eq!(adc_to_microvolts(16384, 100.0), 50.0);
    }

    #[test]
    fn test_negative_full_scale() {
        assert_eq!(adc_to_microvolts(-32768, 100.0), -100.0);
    }

    #[test]
    fn test_zero_sample() {
        assert_eq!(adc_to_microvolts(0, 100.0), 0.0);
    }

    #[test]
    fn test_scaling_tracks_ceiling() {
        assert_eq!(adc_to_microvolts(16384, 200.0), 100.0);
    }
}
