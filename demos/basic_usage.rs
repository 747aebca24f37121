// ============================================================================
// Basic Usage Example
// ============================================================================

use digit_sqrt::prelude::*;

fn main() {
    println!("=== Digit-by-Digit Square Root Example ===\n");

    let target = "123.4";
    let numeral = Numeral::parse(target).unwrap();
    let groups = GroupSequence::from_numeral(&numeral).unwrap();
    println!("Groups for {}: {:?}", target, groups.groups());
    println!(
        "Digits before the point: {}\n",
        groups.answer_decimal_index()
    );

    // Watch the precision grow with the extra loops
    println!("Refining...");
    for extra_loops in [-1i64, 0, 2, 6, 12] {
        let engine = DigitRootEngine::new(EngineConfig::new(extra_loops));
        let result = engine.compute(&groups).unwrap();
        println!(
            "  extra_loops = {:>3}: {}",
            extra_loops,
            result.result_string()
        );
    }

    // Full trace for the default configuration
    let result = DigitRootEngine::default().compute(&groups).unwrap();
    println!("\nIterations:");
    for (i, it) in result.iterations().iter().enumerate() {
        println!(
            "  #{} group={:>2} digit={} guess={} start={} epsilon={} partial={}",
            i, it.group, it.digit, it.guess, it.start, it.epsilon, it.partial
        );
    }

    let report = ErrorReport::from_result(&numeral.to_decimal().unwrap(), &result).unwrap();
    println!("\n{}", report);

    println!("{}", LongDivisionDiagram::new(&result, target));

    println!("=== Example Complete ===");
}
