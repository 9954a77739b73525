use logic_rs::circuit::{Circuit, CircuitGate};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    // Half adder from AND/OR/NOT: sum = (a or b) and not (a and b), carry = a and b
    let mut circuit = Circuit::new();
    let a = circuit.add_input(false);
    let b = circuit.add_input(false);
    let or = circuit.add_gate(CircuitGate::Or);
    let and = circuit.add_gate(CircuitGate::And);
    let not = circuit.add_gate(CircuitGate::Not);
    let sum_gate = circuit.add_gate(CircuitGate::And);
    let sum = circuit.add_output();
    let carry = circuit.add_output();

    circuit.connect(a, or)?;
    circuit.connect(b, or)?;
    circuit.connect(a, and)?;
    circuit.connect(b, and)?;
    circuit.connect(and, not)?;
    circuit.connect(or, sum_gate)?;
    circuit.connect(not, sum_gate)?;
    circuit.connect(sum_gate, sum)?;
    circuit.connect(and, carry)?;

    circuit.toggle_input(a)?;
    let values = circuit.evaluate()?;
    for (id, value) in values.iter() {
        println!("{} {} = {}", id, circuit.element(id)?, value as u8);
    }
    for wire in circuit.wires() {
        println!("{} -> {}: {:?}", wire.from, wire.to, values.wire(wire));
    }

    println!();
    println!("sum = {}, carry = {}", sum, carry);
    print!("{}", circuit.truth_table()?);

    // Feedback loop: reported instead of recursing forever.
    let loop_gate = circuit.add_gate(CircuitGate::Not);
    circuit.connect(loop_gate, loop_gate)?;
    match circuit.evaluate_node(loop_gate) {
        Ok(value) => println!("{} = {}", loop_gate, value),
        Err(e) => println!("{}", e),
    }

    Ok(())
}
