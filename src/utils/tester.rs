//! Internal testing utilities

use std::cell::Cell;
use std::sync::atomic::{AtomicUsize, Ordering};

//  SpyCount
//
//  A counter of the number of instances of elements.
pub struct SpyCount(AtomicUsize);

impl SpyCount {
    pub fn zero() -> Self { SpyCount(AtomicUsize::new(0)) }

    pub fn get(&self) -> usize { self.0.load(Ordering::Relaxed) }

    fn decrement(&self) { self.0.fetch_sub(1, Ordering::Relaxed); }

    fn increment(&self) { self.0.fetch_add(1, Ordering::Relaxed); }
}

//  Spy Element
//
//  An element tracking the number of instances, helpful to ensure proper drop.
//
//  Default instances are not tracked, so as to fill spare slots.
#[derive(Default)]
pub struct SpyElement<'a> {
    count: Option<&'a SpyCount>,
}

impl<'a> SpyElement<'a> {
    pub fn new(count: &'a SpyCount) -> Self {
        count.increment();
        SpyElement { count: Some(count) }
    }
}

impl<'a> Clone for SpyElement<'a> {
    fn clone(&self) -> Self {
        match self.count {
            Some(count) => Self::new(count),
            None => Self::default(),
        }
    }
}

impl<'a> Drop for SpyElement<'a> {
    fn drop(&mut self) {
        if let Some(count) = self.count {
            count.decrement();
        }
    }
}

thread_local! {
    static ARMED_DEFAULT: Cell<bool> = const { Cell::new(false) };
    static ARMED_CLONE: Cell<bool> = const { Cell::new(false) };
}

//  A value whose default construction panics, once armed.
//
//  Arming is per thread, and hence per test.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PanickyDefault(pub u32);

impl PanickyDefault {
    pub fn arm() { ARMED_DEFAULT.with(|armed| armed.set(true)); }

    pub fn disarm() { ARMED_DEFAULT.with(|armed| armed.set(false)); }
}

impl Default for PanickyDefault {
    fn default() -> Self {
        if ARMED_DEFAULT.with(Cell::get) { panic!("Oh No!") }

        Self(0)
    }
}

//  A value whose cloning panics, once armed.
//
//  Arming is per thread, and hence per test.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct PanickyClone(pub u32);

impl PanickyClone {
    pub fn arm() { ARMED_CLONE.with(|armed| armed.set(true)); }

    pub fn disarm() { ARMED_CLONE.with(|armed| armed.set(false)); }
}

impl Clone for PanickyClone {
    fn clone(&self) -> Self {
        if ARMED_CLONE.with(Cell::get) { panic!("Oh No!") }

        Self(self.0)
    }
}
