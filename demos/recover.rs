use rpoly::recover_lines;

fn main() {
    // (base, digits) pairs; x is each entry's 1-based position.
    let shares: [(u32, &str); 10] = [
        (6, "13444211440455345511"),
        (15, "aed7015a346d635"),
        (15, "6aeeb69631c227c"),
        (16, "e1b5e05623d881f"),
        (8, "316034514573652620673"),
        (3, "2122212201122002221120200210011020220200"),
        (3, "20120221122211000100210021102001201112121"),
        (6, "20220554335330240002224253"),
        (12, "45153788322a1255483"),
        (7, "1101613130313526312514143"),
    ];
    let k = 7;

    match recover_lines(&shares, k) {
        Ok(lines) => println!("{}", lines.join("\n")),
        Err(err) => eprintln!("recovery failed: {err}"),
    }
}
