//! Building this module successfully guarantees that the library is no-std compatible

#![no_std]
#![no_main]

use core::panic::PanicInfo;

use interpts::TimeSeries;

#[panic_handler]
fn panic(_info: &PanicInfo) -> ! {
    // We can't print, so there's not much to do here
    loop {}
}

#[no_mangle]
pub fn _start() -> ! {
    let times = [0.0_f64, 1.0, 4.0];
    let vals = [10.0_f64, -1.0, 20.0, -2.0, 50.0, -5.0];
    let query = [0.5_f64, 2.5];

    let mut out = [0.0; 4];

    let series = TimeSeries::new(&times, &vals, 2).unwrap();
    series.resample(&query, &mut out).unwrap();
    series.resample_monotonic(&query, &mut out).unwrap();

    loop {} // We don't actually run this, just compile it
}
