// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin assignments for the fan controller on a NUCLEO-F767ZI.

use stm32f7xx_hal::{
    gpio::{gpioa, gpiob, gpiod, Alternate, Analog, Output, PushPull},
    pac,
    prelude::*,
};

/// All board pins. Construct this once at startup using:
///
/// ```ignore
/// let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOD);
/// ```
pub struct BoardPins {
    pub status_led: gpiob::PB0<Output<PushPull>>, // LD1 (green)
    pub usart3: Usart3Pins,
    pub fan: FanPins,
}

/// Debug terminal, routed to the ST-LINK virtual COM port.
pub struct Usart3Pins {
    pub tx: gpiod::PD8<Alternate<7>>,
    pub rx: gpiod::PD9<Alternate<7>>,
}

pub struct FanPins {
    pub pwm: gpiod::PD12<Alternate<2>>, // TIM4_CH1
    pub sense: gpioa::PA3<Analog>,      // ADC1_IN3, TMP35 via x4 amplifier
}

impl BoardPins {
    pub fn new(gpioa: pac::GPIOA, gpiob: pac::GPIOB, gpiod: pac::GPIOD) -> Self {
        let gpioa = gpioa.split();
        let gpiob = gpiob.split();
        let gpiod = gpiod.split();

        Self {
            status_led: gpiob.pb0.into_push_pull_output(),

            usart3: Usart3Pins {
                tx: gpiod.pd8.into_alternate::<7>(),
                rx: gpiod.pd9.into_alternate::<7>(),
            },

            fan: FanPins {
                pwm: gpiod.pd12.into_alternate::<2>(),
                sense: gpioa.pa3.into_analog(),
            },
        }
    }
}
