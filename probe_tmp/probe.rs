fn main() {
    for cfg in ["[rules]\na.=warn = default;>stdout\n", "[rules]\nb.>warn = default;>stdout\n", "[rules]\nc.>=warn = default;>stdout\n"] {
        let res = tlogcheck::lint::check_str(cfg);
        println!("{:?} -> {:?}", cfg, res.diagnostics.iter().map(|d| d.message.clone()).collect::<Vec<_>>());
    }
}
