use super::*;
use crate::kernel::layout::RawLayout;
use crate::kernel::Action;

#[test]
fn drain_returns_messages_in_send_order() {
    let (tx, mut rx) = kernel_bus();
    tx.send_action(Action::UpdateLayout(RawLayout::named("grid")))
        .unwrap();
    tx.send_action(Action::update_graph(None)).unwrap();

    let names: Vec<&str> = rx
        .drain()
        .iter()
        .map(|KernelMessage::Action(action)| action.name())
        .collect();
    assert_eq!(names, ["update_layout", "update_graph"]);
    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
}

#[test]
fn senders_work_from_other_threads() {
    let (tx, mut rx) = kernel_bus();
    let handle = std::thread::spawn(move || {
        tx.send_action(Action::update_graph(Some(false))).unwrap();
    });
    handle.join().unwrap();

    assert_eq!(rx.drain().len(), 1);
    assert!(matches!(rx.try_recv(), Err(TryRecvError::Disconnected)));
}
