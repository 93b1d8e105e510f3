use syncell_utils_rs::collections::{Element, PushError, ValueError, ValueReader, ValueWriter};

use crate::cell::shared_cell::SharedCell;

impl<T> SharedCell<T> {
  /// Pushes an element, waiting until the value has a free slot.
  ///
  /// On success one thread waiting for data is woken. A push into a cell that
  /// never gains a free slot blocks indefinitely; there is no timeout.
  pub fn push<E>(&self, mut element: E)
  where
    E: Element,
    T: ValueWriter<E>, {
    let mut guard = self.inner.value.lock();
    loop {
      match guard.push(element) {
        Ok(()) => break,
        Err(PushError::Full(rejected)) => {
          element = rejected;
          tracing::trace!("cell full, waiting for a free slot");
          self.inner.slot_free.wait(&mut guard);
        }
      }
    }
    self.inner.data_ready.notify_one();
  }

  /// Pops the next element, waiting until one is available.
  ///
  /// On success one thread waiting for a free slot is woken.
  pub fn pop<E>(&self) -> E
  where
    E: Element,
    T: ValueReader<E>, {
    let mut guard = self.inner.value.lock();
    loop {
      if let Some(element) = guard.pop() {
        self.inner.slot_free.notify_one();
        return element;
      }
      tracing::trace!("cell empty, waiting for data");
      self.inner.data_ready.wait(&mut guard);
    }
  }

  /// Non-blocking push. On a full value the element comes back inside the error.
  pub fn try_push<E>(&self, element: E) -> Result<(), ValueError<E>>
  where
    E: Element,
    T: ValueWriter<E>, {
    let mut guard = self.inner.value.lock();
    match guard.push(element) {
      Ok(()) => {
        self.inner.data_ready.notify_one();
        Ok(())
      }
      Err(error) => Err(error.into()),
    }
  }

  /// Non-blocking pop.
  pub fn try_pop<E>(&self) -> Result<E, ValueError<E>>
  where
    E: Element,
    T: ValueReader<E>, {
    let mut guard = self.inner.value.lock();
    match guard.pop() {
      Some(element) => {
        self.inner.slot_free.notify_one();
        Ok(element)
      }
      None => Err(ValueError::Empty),
    }
  }

  /// Builds an element in place once a slot is free, then pushes it.
  ///
  /// `make` runs under the cell lock, after the fullness check, so the element
  /// is only constructed when it has somewhere to go. A panic in `make` releases
  /// the lock and leaves the value as it was.
  pub fn emplace<E, F>(&self, make: F)
  where
    E: Element,
    T: ValueWriter<E>,
    F: FnOnce() -> E, {
    let mut guard = self.inner.value.lock();
    while guard.is_full() {
      tracing::trace!("cell full, waiting before constructing an element");
      self.inner.slot_free.wait(&mut guard);
    }
    let mut element = make();
    loop {
      match guard.push(element) {
        Ok(()) => break,
        Err(PushError::Full(rejected)) => {
          element = rejected;
          self.inner.slot_free.wait(&mut guard);
        }
      }
    }
    self.inner.data_ready.notify_one();
  }

  /// Non-blocking [`SharedCell::emplace`]: `make` does not run when the value is
  /// full. Returns whether an element was pushed.
  pub fn try_emplace<E, F>(&self, make: F) -> bool
  where
    E: Element,
    T: ValueWriter<E>,
    F: FnOnce() -> E, {
    let mut guard = self.inner.value.lock();
    if guard.is_full() {
      return false;
    }
    match guard.push(make()) {
      Ok(()) => {
        self.inner.data_ready.notify_one();
        true
      }
      Err(PushError::Full(_)) => false,
    }
  }
}
