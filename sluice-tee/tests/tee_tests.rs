// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sluice_core::{IntoSource, SluiceError, Source};
use sluice_tee::{tee, Branch, TeeExt};
use sluice_test_utils::{counting, drain, mixed, FailingSource, TestData};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_zero_branches_rejected() {
    let result = tee(vec![1, 2].into_source(), 0);
    assert!(matches!(result, Err(SluiceError::InvalidArgument { .. })));
}

#[test]
fn test_branches_are_numbered_in_order() -> anyhow::Result<()> {
    let branches = vec![1].into_source().tee(3)?;
    let ids: Vec<usize> = branches.iter().map(|b| b.id()).collect();
    assert_eq!(ids, vec![0, 1, 2]);
    Ok(())
}

#[test]
fn test_window_follows_slowest_branch_then_empties() -> anyhow::Result<()> {
    // Arrange
    let mut branches = tee(vec!['a', 'b', 'c'].into_source(), 2)?;
    let mut b = branches.pop().expect("two branches");
    let mut a = branches.pop().expect("two branches");

    // Act & Assert
    assert_eq!(a.next_value()?, 'a');
    assert_eq!(a.buffer_window()?, (0, 1));

    assert_eq!(b.next_value()?, 'a');
    assert_eq!(b.next_value()?, 'b');
    assert_eq!(b.buffer_window()?, (0, 2));

    assert_eq!(a.next_value()?, 'b');
    assert_eq!(a.buffer_window()?, (1, 2));
    assert_eq!(a.buffered()?, 1);

    assert_eq!(a.next_value()?, 'c');
    assert_eq!(a.buffer_window()?, (1, 3));
    assert_eq!(b.next_value()?, 'c');
    assert_eq!(b.buffer_window()?, (2, 3));
    assert!(!a.has_value()?);
    assert!(!b.has_value()?);
    assert_eq!(a.buffered()?, 0);
    assert_eq!(a.pulled()?, 3);
    Ok(())
}

#[test]
fn test_single_read_under_interleaving() -> anyhow::Result<()> {
    // Arrange
    let (source, pulls) = counting(0..50);
    let mut branches = tee(source, 3)?;

    // Act: round-robin with uneven strides until every branch is drained
    let mut seen = vec![Vec::new(); 3];
    let mut live = 3;
    let mut turn = 0usize;
    while live > 0 {
        let id = turn % 3;
        turn += 1;
        for _ in 0..=id {
            let branch = &mut branches[id];
            if !branch.is_active()? {
                break;
            }
            if branch.has_value()? {
                seen[id].push(branch.next_value()?);
            } else {
                branch.deactivate();
                live -= 1;
                break;
            }
        }
    }

    // Assert
    let expected: Vec<i32> = (0..50).collect();
    for items in &seen {
        assert_eq!(items, &expected);
    }
    assert_eq!(pulls.get(), 50);
    Ok(())
}

#[test]
fn test_fast_branch_does_not_lose_items_for_idle_branch() -> anyhow::Result<()> {
    // Arrange
    let mut branches = tee(mixed().into_source(), 2)?;

    // Act
    let first = drain(&mut branches[0])?;
    let held = branches[1].buffered()?;
    let second = drain(&mut branches[1])?;

    // Assert
    assert_eq!(first, mixed());
    assert_eq!(held, mixed().len());
    assert_eq!(second, mixed());
    assert_eq!(branches[1].buffered()?, 0);
    Ok(())
}

#[test]
fn test_deactivated_idle_branch_stops_pinning_buffer() -> anyhow::Result<()> {
    // Arrange
    let (source, pulls) = counting(1..=10);
    let mut branches = tee(source, 2)?;

    // Act
    for _ in 0..4 {
        branches[0].next_value()?;
    }
    let pinned = branches[0].buffered()?;
    branches[1].deactivate();

    // Assert: only the item the reader last received stays
    assert_eq!(pinned, 4);
    assert_eq!(branches[0].buffered()?, 1);
    assert_eq!(branches[0].buffer_window()?, (3, 4));
    assert!(!branches[1].is_active()?);
    assert!(!branches[1].has_value()?);
    assert_eq!(drain(&mut branches[0])?, vec![5, 6, 7, 8, 9, 10]);
    assert_eq!(pulls.get(), 10);
    Ok(())
}

#[test]
fn test_next_value_on_inactive_branch_is_a_protocol_violation() -> anyhow::Result<()> {
    let mut branches = tee(vec![1, 2].into_source(), 2)?;
    branches[0].deactivate();
    branches[0].deactivate();

    let err = branches[0].next_value().unwrap_err();

    assert!(matches!(err, SluiceError::ProtocolViolation { .. }));
    assert_eq!(branches[1].next_value()?, 1);
    Ok(())
}

#[test]
fn test_next_value_past_end_is_a_protocol_violation() -> anyhow::Result<()> {
    let mut branches = tee(vec!["only"].into_source(), 1)?;
    assert_eq!(branches[0].next_value()?, "only");

    let err = branches[0].next_value().unwrap_err();

    assert!(err.is_misuse());
    Ok(())
}

#[test]
fn test_dropping_branch_releases_it() -> anyhow::Result<()> {
    // Arrange
    let mut branches = tee(vec![1, 2, 3].into_source(), 2)?;
    let mut keeper = branches.remove(0);

    // Act
    keeper.next_value()?;
    keeper.next_value()?;
    let before = keeper.buffered()?;
    drop(branches);

    // Assert
    assert_eq!(before, 2);
    assert_eq!(keeper.buffered()?, 1);
    assert_eq!(keeper.next_value()?, 3);
    assert!(!keeper.has_value()?);
    assert_eq!(keeper.buffered()?, 0);
    Ok(())
}

#[test]
fn test_each_branch_keeps_its_last_item() -> anyhow::Result<()> {
    // Arrange
    let mut branches = tee((1..=4).into_source(), 2)?;

    // Act
    branches[0].next_value()?;
    branches[0].next_value()?;
    branches[1].next_value()?;
    branches[1].next_value()?;

    // Assert: both cursors sit past position 1, which is still kept
    assert_eq!(branches[0].buffer_window()?, (1, 2));
    assert_eq!(branches[1].buffered()?, 1);
    Ok(())
}

#[test]
fn test_early_return_releases_branch() -> anyhow::Result<()> {
    fn first_animal<S>(branch: &mut Branch<S>) -> sluice_core::Result<Option<TestData>>
    where
        S: Source<Item = TestData>,
    {
        for item in branch {
            let item = item?;
            if !item.is_person() {
                return Ok(Some(item));
            }
        }
        Ok(None)
    }

    // Arrange
    let mut branches = tee(mixed().into_source(), 2)?;
    let mut scanner = branches.pop().expect("two branches");
    let mut reader = branches.pop().expect("two branches");

    // Act: the scanner stops after two items and is dropped
    let animal = first_animal(&mut scanner)?;
    drop(scanner);

    // Assert
    assert_eq!(animal.map(|a| a.name().to_string()), Some("Dog".to_string()));
    assert_eq!(reader.buffered()?, 2);
    assert_eq!(drain(&mut reader)?, mixed());
    Ok(())
}

#[test]
fn test_dropping_every_branch_discards_state() -> anyhow::Result<()> {
    let (source, pulls) = counting(0..);
    let mut branches = tee(source, 3)?;
    branches[2].next_value()?;
    branches[2].next_value()?;

    drop(branches);

    assert_eq!(pulls.get(), 2);
    Ok(())
}

#[test]
fn test_source_fault_reaches_pulling_branch_only() -> anyhow::Result<()> {
    // Arrange
    let mut branches = tee(FailingSource::new(vec![10, 20, 30], 1), 2)?;

    // Act
    assert_eq!(branches[0].next_value()?, 10);
    let fault = branches[0].next_value();
    let window = branches[0].buffer_window()?;

    // Assert: nothing was buffered for the failed pull and both branches carry on
    assert!(matches!(fault, Err(SluiceError::SourceError { .. })));
    assert_eq!(window, (0, 1));
    assert_eq!(branches[0].next_value()?, 30);
    assert_eq!(branches[1].next_value()?, 10);
    assert_eq!(branches[1].next_value()?, 30);
    assert!(!branches[1].has_value()?);
    Ok(())
}

#[test]
fn test_branch_iterator_collects_all_items() -> anyhow::Result<()> {
    let branches = tee((1..=5).into_source(), 2)?;
    let mut collected = Vec::new();
    for branch in branches {
        collected.push(branch.collect::<sluice_core::Result<Vec<_>>>()?);
    }
    assert_eq!(collected, vec![vec![1, 2, 3, 4, 5], vec![1, 2, 3, 4, 5]]);
    Ok(())
}

// A source that inspects a branch of the tee it feeds while being pulled.
struct PeekingSource {
    items: Vec<u8>,
    peer: Rc<RefCell<Option<Branch<PeekingSource>>>>,
    seen: Rc<RefCell<Vec<sluice_core::Result<usize>>>>,
}

impl Source for PeekingSource {
    type Item = u8;

    fn has_more(&mut self) -> sluice_core::Result<bool> {
        if let Some(peer) = self.peer.borrow().as_ref() {
            self.seen.borrow_mut().push(peer.buffered());
        }
        Ok(!self.items.is_empty())
    }

    fn advance(&mut self) -> sluice_core::Result<u8> {
        self.items.pop().ok_or(SluiceError::SourceExhausted)
    }
}

#[test]
fn test_reading_branch_state_from_inside_the_source_is_reported() -> anyhow::Result<()> {
    // Arrange
    let peer = Rc::new(RefCell::new(None));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let source = PeekingSource {
        items: vec![2, 1],
        peer: Rc::clone(&peer),
        seen: Rc::clone(&seen),
    };
    let mut branches = tee(source, 2)?;
    *peer.borrow_mut() = branches.pop();

    // Act
    let first = branches[0].next_value()?;

    // Assert
    assert_eq!(first, 1);
    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert!(matches!(seen[0], Err(SluiceError::ProtocolViolation { .. })));
    drop(seen);

    // the peer branch is still usable once the pull is over
    let peer = peer.borrow_mut().take().expect("peer branch stored");
    assert_eq!(peer.buffered()?, 1);
    Ok(())
}
