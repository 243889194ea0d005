//! # Entry Point
//!
//! The ROM loads an application image and looks in its `.entry_point` section for a single
//! function pointer, which it calls once with the [`Callbacks`] table. The value that
//! function returns is handed back to the ROM when the application exits.
//!
//! The [`entry!`](crate::entry) macro emits that function and the pointer to it, and routes
//! the call through [`start`]:
//!
//! ```ignore
//! monotron::entry!(main);
//!
//! fn main(console: &mut monotron::Console<'_>) -> i32 {
//!     0
//! }
//! ```

#[cfg(all(target_os = "none", feature = "panic-loop"))]
use core::panic::PanicInfo;

use log::debug;

use crate::callbacks::Callbacks;
use crate::console::Console;
use crate::host::Firmware;

/// Shape of the function the ROM calls.
pub type EntryPoint = unsafe extern "C" fn(*const Callbacks) -> i32;

/// An application's `main`.
pub type Main = fn(&mut Console<'_>) -> i32;

#[cfg(all(target_os = "none", feature = "panic-loop"))]
#[panic_handler]
fn panic(_panic: &PanicInfo<'_>) -> ! {
    loop {}
}

/// Bind the callback table and run `main`, returning its result.
///
/// # Safety
///
/// `callbacks` must point to a valid table whose entries stay callable until `main` returns.
/// Nothing here checks for null.
pub unsafe fn start(callbacks: *const Callbacks, main: Main) -> i32 {
    let table = unsafe { &*callbacks };
    debug!("binding callback table at {:p}", callbacks);

    let mut firmware = unsafe { Firmware::new(table) };
    let console = &mut Console::new(&mut firmware);
    main(console)
}

/// Declare the application's entry point.
///
/// Expands to an `extern "C" fn entry` and an `ENTRY_POINT` static pointing at it. On
/// bare-metal targets the static is placed in the `.entry_point` link section.
#[macro_export]
macro_rules! entry {
    ($main:path) => {
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn entry(callbacks: *const $crate::Callbacks) -> i32 {
            unsafe { $crate::boot::start(callbacks, $main) }
        }

        #[cfg_attr(target_os = "none", unsafe(link_section = ".entry_point"))]
        #[unsafe(no_mangle)]
        #[used]
        pub static ENTRY_POINT: $crate::boot::EntryPoint = entry;
    };
}
