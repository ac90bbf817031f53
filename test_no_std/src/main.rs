//! Building this module successfully guarantees that the library is no-std compatible

#![no_std]
#![no_main]

use core::panic::PanicInfo;

use cspline::{eval, fit, Boundary, CubicSpline};

#[panic_handler]
fn panic(_info: &PanicInfo) -> ! {
    // We can't print, so there's not much to do here
    loop {}
}

#[no_mangle]
pub fn _start() -> ! {
    let x = [0.0_f64, 2.0, 5.0, 6.0, 8.0, 10.0];
    let y = [0.0_f64, 1.0, 3.0, 6.0, 7.0, 10.0];

    // Second derivatives and scratch on the stack
    let mut y2 = [0.0; 6];
    let mut work = [0.0; 6];
    fit::fit_into(&x, &y, Boundary::Natural, Boundary::Natural, &mut y2, &mut work).unwrap();

    let mut cursor = 0;
    let _ = eval::splint(&x, &y, &y2, 4.0, &mut cursor).unwrap();

    let obs = [1.0_f64, 9.0, 3.0];
    let mut out = [0.0; 3];
    CubicSpline::new(&x, &y, &y2).unwrap().eval(&obs, &mut out).unwrap();

    loop {} // We don't actually run this, just compile it
}
