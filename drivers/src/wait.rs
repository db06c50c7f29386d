/*++

Licensed under the Apache-2.0 license.

File Name:

    wait.rs

Abstract:

    File contains common functions to implement busy-wait routines.

--*/

pub fn until<F>(predicate: F)
where
    F: Fn() -> bool,
{
    while !predicate() {}
}
