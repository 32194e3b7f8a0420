/*!
 * Scheduler Tests
 * End-to-end tests for the five scheduling algorithms
 */

use cpu_sched_sim::scheduler::{
    Fcfs, PriorityScheduling, RoundRobin, ShortestJobFirst, ShortestRemainingTime,
};
use cpu_sched_sim::{
    first_come_first_serve, priority, round_robin, shortest_job_first,
    shortest_remaining_time_first, Algorithm, ProcessDescriptor, Quantum, ReadyQueue, Scheduler,
    SchedulerError,
};
use pretty_assertions::assert_eq;

fn approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

/// (priority, arrival, burst) triples in input order
fn queue_of(specs: &[(u32, u32, u32)]) -> ReadyQueue {
    specs
        .iter()
        .enumerate()
        .map(|(pid, &(priority, arrival, burst))| {
            ProcessDescriptor::new(pid as u32, priority, arrival, burst)
        })
        .collect()
}

fn reference_queue() -> ReadyQueue {
    queue_of(&[(0, 0, 2), (0, 0, 3), (0, 0, 0), (0, 0, 6), (0, 0, 1)])
}

fn textbook_queue() -> ReadyQueue {
    queue_of(&[(3, 0, 8), (1, 1, 4), (4, 2, 9), (2, 3, 5)])
}

#[test]
fn test_fcfs_reference_scenario() {
    let result = first_come_first_serve(&reference_queue()).unwrap();

    assert_eq!(result.total_run_time, 12);
    approx(result.average_waiting_time, 4.6);
    approx(result.average_turnaround_time, 7.0);
}

#[test]
fn test_fcfs_textbook() {
    let report = Fcfs.simulate(&textbook_queue()).unwrap();

    assert_eq!(report.completion_order(), vec![0, 1, 2, 3]);
    approx(report.result.average_waiting_time, 8.75);
    approx(report.result.average_turnaround_time, 15.25);
    assert_eq!(report.result.total_run_time, 26);
}

#[test]
fn test_sjf_textbook() {
    let report = ShortestJobFirst.simulate(&textbook_queue()).unwrap();

    // Sorted by burst: 1:1-5 3:5-10 0:10-18 2:18-27
    assert_eq!(report.completion_order(), vec![1, 3, 0, 2]);
    approx(report.result.average_waiting_time, 7.0);
    approx(report.result.average_turnaround_time, 13.5);
    assert_eq!(report.result.total_run_time, 27);
}

#[test]
fn test_priority_textbook() {
    // Sorted by priority: 1 (prio 1), 3 (prio 2), 0 (prio 3), 2 (prio 4);
    // the CPU idles until pid 1 arrives at t=1
    let report = PriorityScheduling.simulate(&textbook_queue()).unwrap();

    assert_eq!(report.completion_order(), vec![1, 3, 0, 2]);
    let waits: Vec<_> = report.completions.iter().map(|c| c.waiting_time).collect();
    assert_eq!(waits, vec![0, 2, 10, 16]);
    assert_eq!(report.result.total_run_time, 27);
}

#[test]
fn test_round_robin_textbook() {
    let rr = RoundRobin::new(Quantum::new(4).unwrap());
    let report = rr.simulate(&textbook_queue()).unwrap();

    // 0:0-4 1:4-8 2:8-12 3:12-16 0:16-20 2:20-24 3:24-25 2:25-26
    assert_eq!(report.completion_order(), vec![1, 0, 3, 2]);
    let completions: Vec<_> = report
        .completions
        .iter()
        .map(|c| c.completion_time)
        .collect();
    assert_eq!(completions, vec![8, 20, 25, 26]);
    approx(report.result.average_waiting_time, 47.0 / 4.0);
    assert_eq!(report.result.total_run_time, 26);
}

#[test]
fn test_srt_textbook() {
    let report = ShortestRemainingTime.simulate(&textbook_queue()).unwrap();

    assert_eq!(report.completion_order(), vec![1, 3, 0, 2]);
    approx(report.result.average_waiting_time, 6.5);
    approx(report.result.average_turnaround_time, 13.0);
    assert_eq!(report.result.total_run_time, 26);
}

#[test]
fn test_empty_queue_policy() {
    let empty = ReadyQueue::new();

    // FCFS accepts an empty queue, the others reject it
    let fcfs = first_come_first_serve(&empty).unwrap();
    assert_eq!(fcfs.total_run_time, 0);
    approx(fcfs.average_waiting_time, 0.0);

    for err in [
        shortest_job_first(&empty).unwrap_err(),
        priority(&empty).unwrap_err(),
        round_robin(&empty, 2).unwrap_err(),
        shortest_remaining_time_first(&empty).unwrap_err(),
    ] {
        assert!(matches!(err, SchedulerError::InvalidArgument(_)));
    }
}

#[test]
fn test_zero_quantum_rejected() {
    let err = round_robin(&reference_queue(), 0).unwrap_err();
    assert!(matches!(err, SchedulerError::InvalidArgument(_)));
}

#[test]
fn test_queue_reusable_across_algorithms() {
    let queue = textbook_queue();
    let snapshot = queue.clone();
    let quantum = Quantum::new(3).ok();

    let first: Vec<_> = Algorithm::ALL
        .iter()
        .map(|a| a.run(&queue, quantum).unwrap())
        .collect();
    let second: Vec<_> = Algorithm::ALL
        .iter()
        .map(|a| a.run(&queue, quantum).unwrap())
        .collect();

    assert_eq!(first, second);
    assert_eq!(queue, snapshot);
}

#[test]
fn test_non_preemptive_never_preempt() {
    let queue = textbook_queue();
    for algorithm in [Algorithm::Fcfs, Algorithm::Sjf, Algorithm::Priority] {
        let report = algorithm.simulate(&queue, None).unwrap();
        assert_eq!(report.preemptions, 0, "{} preempted", algorithm);
    }
}

#[test]
fn test_large_times_do_not_overflow() {
    let queue = queue_of(&[(0, u32::MAX, u32::MAX), (0, u32::MAX, u32::MAX)]);
    let result = first_come_first_serve(&queue).unwrap();
    assert_eq!(result.total_run_time, u64::from(u32::MAX) * 3);
    approx(result.average_waiting_time, f64::from(u32::MAX) / 2.0);
}
