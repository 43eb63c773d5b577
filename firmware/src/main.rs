// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Fan controller firmware for the NUCLEO-F767ZI.
//!
//! SysTick advances the tick counter at 1 kHz and the ADC interrupt folds each conversion into the
//! moving average. Everything else runs from the scheduler in the main loop.

#![no_main]
#![no_std]

use cortex_m::peripheral::NVIC;
use cortex_m_rt::{entry, exception};
use panic_halt as _;

#[cfg(feature = "defmt")]
use defmt_rtt as _;

use hal::{
    pac::{self, interrupt},
    prelude::*,
    serial::{Config as SerialConfig, Serial},
};
use stm32f7xx_hal as hal;

use fanctrl::{
    config::{Config, ADC_CHANNEL, BOOT_DUTY, MAX_EVENTS, PWM_FREQUENCY_HZ},
    events::{Scheduler, Ticker},
    hw::{FanDrive, PwmFan, StatusLed},
    sensor::SmoothedSample,
    FanController,
};

mod hw;
use hw::{systick, Adc1, BoardPins, FanPwm, LedPin, Telemetry};

static TICKS: Ticker = Ticker::new();
static SAMPLE: SmoothedSample = SmoothedSample::new();

#[cfg(feature = "defmt")]
defmt::timestamp!("{=u32}", TICKS.now());

type Controller = FanController<'static, Adc1, PwmFan<FanPwm>, LedPin>;

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();
    let cp = cortex_m::Peripherals::take().unwrap();
    let config = Config::DEFAULT;

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.sysclk(216.MHz()).freeze();

    // GPIO
    let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOD);
    let _fan_pwm_pin = pins.fan.pwm;
    let _fan_sense_pin = pins.fan.sense;

    // USART3 (ST-LINK VCP)
    let usart_cfg = SerialConfig {
        baud_rate: 115_200.bps(),
        ..Default::default()
    };
    let serial = Serial::new(dp.USART3, (pins.usart3.tx, pins.usart3.rx), &clocks, usart_cfg);
    let mut telemetry = Telemetry::new(serial);
    telemetry.line("fanctrl: boot");
    #[cfg(feature = "defmt")]
    defmt::info!("boot, sysclk {} Hz", clocks.sysclk().raw());

    // Fan: spin up before the first regulation cycle decides anything
    let mut fan = PwmFan::new(FanPwm::tim4(dp.TIM4, &clocks, PWM_FREQUENCY_HZ));
    fan.set_duty_cycle(BOOT_DUTY);

    // Temperature sensor
    let mut adc = Adc1::new(dp.ADC1, ADC_CHANNEL);
    adc.listen();

    let led = StatusLed::active_high(LedPin(pins.status_led));

    let mut controller: Controller = FanController::new(adc, &SAMPLE, fan, led, config);
    let mut scheduler: Scheduler<Controller, MAX_EVENTS> = Scheduler::new();
    controller.register_events(&mut scheduler).unwrap();

    // Interrupts
    unsafe { NVIC::unmask(pac::Interrupt::ADC) };
    let _syst = systick::start(cp.SYST, clocks.sysclk().raw(), config.timing.tick_hz);

    loop {
        scheduler.dispatch(TICKS.now(), &mut controller);
        if let Some(report) = controller.take_report() {
            telemetry.report(&report);
        }
        cortex_m::asm::wfi();
    }
}

#[exception]
fn SysTick() {
    TICKS.tick();
}

#[interrupt]
fn ADC() {
    if let Some(raw) = Adc1::take_result() {
        SAMPLE.process(raw);
    }
}
