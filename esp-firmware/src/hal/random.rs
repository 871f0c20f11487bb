// Hardware-Zufallsquelle für rdm_color / rdm_prog

use esp_core::RandomSource;
use esp_hal::rng::Rng;

/// Wrapper um den ESP32 RNG (Trait aus esp-core, Typ aus esp-hal)
pub struct HardwareRng(Rng);

impl HardwareRng {
    pub fn new(rng: Rng) -> Self {
        Self(rng)
    }
}

impl RandomSource for HardwareRng {
    fn next_u32(&mut self) -> u32 {
        self.0.random()
    }
}
