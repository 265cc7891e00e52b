use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Pull side of a message channel.
pub trait InPort<T> {
    /// Next message, or `None` once the queue is empty.
    fn poll(&mut self) -> Option<T>;
}

/// Push side of a message channel.
pub trait OutPort<T> {
    fn offer(&mut self, item: T);
}

/// Sending half of a [`channel`]. Clones feed the same queue.
#[derive(Debug)]
pub struct Sender<T> {
    queue: Rc<RefCell<VecDeque<T>>>,
}

impl<T> Clone for Sender<T> {
    fn clone(&self) -> Self {
        Self { queue: Rc::clone(&self.queue) }
    }
}

impl<T> Sender<T> {
    /// Messages offered but not yet polled.
    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }
}

/// Receiving half of a [`channel`].
#[derive(Debug)]
pub struct Receiver<T> {
    queue: Rc<RefCell<VecDeque<T>>>,
}

impl<T> Receiver<T> {
    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }

    /// Removes and returns everything queued.
    pub fn drain(&mut self) -> Vec<T> {
        self.queue.borrow_mut().drain(..).collect()
    }
}

/// Creates a single-threaded FIFO channel.
pub fn channel<T>() -> (Sender<T>, Receiver<T>) {
    let queue = Rc::new(RefCell::new(VecDeque::new()));
    (Sender { queue: Rc::clone(&queue) }, Receiver { queue })
}

impl<T> OutPort<T> for Sender<T> {
    fn offer(&mut self, item: T) {
        self.queue.borrow_mut().push_back(item);
    }
}

impl<T> InPort<T> for Receiver<T> {
    fn poll(&mut self) -> Option<T> {
        self.queue.borrow_mut().pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_order() {
        let (mut tx, mut rx) = channel();
        tx.offer(1);
        tx.offer(2);
        assert_eq!(rx.poll(), Some(1));
        assert_eq!(rx.poll(), Some(2));
        assert_eq!(rx.poll(), None);
    }

    #[test]
    fn cloned_senders_share_the_queue() {
        let (mut a, mut rx) = channel();
        let mut b = a.clone();
        a.offer("a");
        b.offer("b");
        assert_eq!(rx.len(), 2);
        assert_eq!(a.len(), 2);
        assert_eq!(rx.drain(), ["a", "b"]);
        assert!(rx.is_empty());
        assert!(b.is_empty());
    }
}
