use kubefont_core::Disposer;
use std::cell::RefCell;
use std::rc::Rc;

fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Box<dyn FnOnce()>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let log2 = log.clone();
    let make = move |name: &'static str| {
        let log = log2.clone();
        Box::new(move || log.borrow_mut().push(name)) as Box<dyn FnOnce()>
    };
    (log, make)
}

#[test]
fn runs_in_reverse_order_once() {
    let (log, make) = recorder();
    let mut d = Disposer::new();
    d.defer("canvas", make("canvas"));
    d.defer("listener", make("listener"));
    d.defer("frame loop", make("frame loop"));
    assert_eq!(d.len(), 3);
    d.dispose();
    d.dispose();
    assert_eq!(*log.borrow(), vec!["frame loop", "listener", "canvas"]);
    assert!(d.is_disposed());
    assert!(d.is_empty());
}

#[test]
fn drop_disposes() {
    let (log, make) = recorder();
    {
        let mut d = Disposer::new();
        d.defer("a", make("a"));
    }
    assert_eq!(*log.borrow(), vec!["a"]);
}

#[test]
fn late_actions_run_immediately() {
    let (log, make) = recorder();
    let mut d = Disposer::new();
    d.dispose();
    d.defer("late", make("late"));
    assert_eq!(*log.borrow(), vec!["late"]);
    assert!(d.is_empty());
}
