use rand::Rng;
use spacecopy::cursor::{Constant, Counting, Cursor, Discard, Sink, Source};
use spacecopy::space::{Device, Parallel, Sequential};
use spacecopy::{copy, copy_n};
use std::cell::Cell;
use std::rc::Rc;

fn random_vec(len: usize) -> Vec<i64> {
    let mut rng = rand::rng();
    (0..len).map(|_| rng.random()).collect()
}

#[test]
fn test_copy_scenario() {
    let input = [1, 2, 3, 4, 5];
    let mut output = [0; 5];
    let first = Source::<_, Sequential>::new(&input);
    let end = copy(first, first.end(), Sink::<_, Sequential>::new(&mut output));
    assert_eq!(end.position(), 5);
    assert_eq!(end.capacity(), 0);
    assert_eq!(output, [1, 2, 3, 4, 5]);
}

#[test]
fn test_copy_n_scenario() {
    let input = [10, 20, 30, 40];
    let mut output = [0; 4];
    let end = copy_n(Source::<_, Sequential>::new(&input), 2, Sink::<_, Sequential>::new(&mut output));
    assert_eq!(end.position(), 2);
    assert_eq!(output, [10, 20, 0, 0]);
}

#[test]
fn test_zero_length_copy() {
    let input = [7, 8, 9];
    let mut output = [0; 3];
    let first = Source::<_, Parallel>::new(&input);
    let end = copy(first, first, Sink::<_, Parallel>::at(&mut output, 1));
    assert_eq!(end.position(), 1);
    assert_eq!(output, [0, 0, 0]);
}

#[test]
fn test_copy_is_elementwise_identity_in_every_space() {
    let input = random_vec(1000);

    let mut seq = vec![0; 1000];
    let first = Source::<_, Sequential>::new(&input);
    let end = copy(first, first.end(), Sink::<_, Sequential>::new(&mut seq));
    assert_eq!(end.position(), input.len());

    let mut par = vec![0; 1000];
    let first = Source::<_, Parallel>::new(&input);
    let end = copy(first, first.end(), Sink::<_, Parallel>::new(&mut par));
    assert_eq!(end.position(), input.len());

    let mut dev = vec![0; 1000];
    let first = Source::<_, Device>::new(&input);
    let end = copy(first, first.end(), Sink::<_, Device>::new(&mut dev));
    assert_eq!(end.position(), input.len());

    assert_eq!(seq, input);
    assert_eq!(par, input);
    assert_eq!(dev, input);
}

#[test]
fn test_copy_n_matches_copy() {
    let mut rng = rand::rng();
    for _ in 0..20 {
        let len = rng.random_range(0..600);
        let n = rng.random_range(0..=len);
        let input = random_vec(len);
        let first = Source::<_, Sequential>::new(&input);

        let mut by_range = vec![0; len];
        let a = copy(first, first.advance(n), Sink::<_, Parallel>::new(&mut by_range));

        let mut by_count = vec![0; len];
        let b = copy_n(first, n, Sink::<_, Parallel>::new(&mut by_count));

        assert_eq!(a.position(), b.position());
        assert_eq!(by_range, by_count);
        assert_eq!(by_count[..n], input[..n]);
        assert!(by_count[n..].iter().all(|&x| x == 0));
    }
}

#[test]
fn test_cross_space_copy() {
    let input: Vec<String> = (0..300).map(|i| format!("item-{i}")).collect();
    let mut output = vec![String::new(); 300];
    let end = copy_n(Source::<_, Sequential>::new(&input), 300, Sink::<_, Parallel>::new(&mut output));
    assert_eq!(end.position(), 300);
    assert_eq!(output, input);
}

#[test]
fn test_sequential_copy_of_thread_bound_values() {
    let input: Vec<Rc<i32>> = (0..4).map(Rc::new).collect();
    let mut output = vec![Rc::new(-1); 4];
    let first = Source::<_, Sequential>::new(&input);
    let end = copy(first, first.end(), Sink::<_, Sequential>::new(&mut output));
    assert_eq!(end.position(), 4);
    assert!(input.iter().zip(&output).all(|(a, b)| Rc::ptr_eq(a, b)));

    let cells = [Cell::new(1u8), Cell::new(2)];
    let mut copied = [Cell::new(0u8), Cell::new(0)];
    copy_n(Source::<_, Sequential>::new(&cells), 2, Sink::<_, Sequential>::new(&mut copied));
    cells[0].set(9);
    assert_eq!(copied.iter().map(Cell::get).collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn test_counting_up_to_usize_max() {
    let mut output = [0usize; 3];
    let end = copy_n(Counting::new(usize::MAX), 1, Sink::<_, Sequential>::new(&mut output));
    assert_eq!(end.position(), 1);
    assert_eq!(output[0], usize::MAX);

    let end = copy_n(Counting::new(usize::MAX - 2), 3, Sink::<_, Parallel>::new(&mut output));
    assert_eq!(end.position(), 3);
    assert_eq!(output, [usize::MAX - 2, usize::MAX - 1, usize::MAX]);

    let first = Counting::new(usize::MAX - 1);
    let last = Counting::new(0);
    let mut ranged = [0usize; 2];
    copy(first, last, Sink::<_, Device>::new(&mut ranged));
    assert_eq!(ranged, [usize::MAX - 1, usize::MAX]);
}

#[test]
fn test_unwritten_tail_is_returned() {
    let input = [1, 2];
    let mut output = [0; 5];
    let end = copy_n(Source::<_, Parallel>::new(&input), 2, Sink::<_, Parallel>::new(&mut output));
    let tail = end.into_rest();
    assert_eq!(tail.len(), 3);
    tail.fill(7);
    assert_eq!(output, [1, 2, 7, 7, 7]);
}

#[test]
fn test_copy_into_middle_of_destination() {
    let input = [1, 2, 3];
    let mut output = [0; 6];
    let end = copy_n(Source::<_, Device>::new(&input), 3, Sink::<_, Device>::at(&mut output, 2));
    assert_eq!(end.position(), 5);
    assert_eq!(output, [0, 0, 1, 2, 3, 0]);
}

#[test]
fn test_fancy_sources() {
    let mut counted = vec![0usize; 5];
    copy_n(Counting::new(100), 5, Sink::<_, Parallel>::new(&mut counted));
    assert_eq!(counted, [100, 101, 102, 103, 104]);

    let mut filled = vec![0u8; 600];
    copy_n(Constant::new(0xAB), 600, Sink::<_, Device>::new(&mut filled));
    assert!(filled.iter().all(|&x| x == 0xAB));

    let input = [1, 2, 3];
    let first = Source::<_, Sequential>::new(&input);
    let end = copy(first, first.end(), Discard::new());
    assert_eq!(end.position(), 3);
}

#[test]
fn test_destination_too_short_panics() {
    let result = std::panic::catch_unwind(|| {
        let input = [1, 2, 3];
        let mut output = [0; 2];
        copy_n(Source::<_, Sequential>::new(&input), 3, Sink::<_, Sequential>::new(&mut output));
    });
    assert!(result.is_err());
}
