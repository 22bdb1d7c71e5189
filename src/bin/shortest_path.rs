use dense_paths::io::render::{render_distance_matrix, render_graph, render_path};
use dense_paths::io::{load_graph, LabelStyle};
use dense_paths::{ApspStatus, ShortestPaths};
use std::env;
use std::process;

const USAGE: &str = "usage: shortest_path <graph-file> <command> [--style numeric|lower|upper]

commands:
  stats                 print vertex/edge counts, density, matrix and edge list
  dijkstra <s> <t>      shortest path between two vertices (numbered from 1)
  floyd-warshall        all-pairs distances with Floyd-Warshall
  johnson               all-pairs distances with Johnson's algorithm";

enum Command {
    Stats,
    Dijkstra(usize, usize),
    FloydWarshall,
    Johnson,
}

struct Options {
    path: String,
    command: Command,
    style: LabelStyle,
}

fn parse_vertex(arg: Option<&String>) -> Result<usize, String> {
    let arg = arg.ok_or("missing vertex argument")?;
    match arg.parse::<usize>() {
        Ok(v) if v >= 1 => Ok(v - 1),
        _ => Err(format!("invalid vertex {:?}: vertices are numbered from 1", arg)),
    }
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut positional = Vec::new();
    let mut style = LabelStyle::Numeric;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--style" {
            let name = iter.next().ok_or("--style needs a value")?;
            style = LabelStyle::parse(name).ok_or_else(|| format!("unknown style {:?}", name))?;
        } else {
            positional.push(arg);
        }
    }

    let path = positional.first().ok_or("missing graph file")?.to_string();
    let command = match positional.get(1).map(|s| s.as_str()) {
        Some("stats") => Command::Stats,
        Some("dijkstra") => {
            let source = parse_vertex(positional.get(2).copied())?;
            let target = parse_vertex(positional.get(3).copied())?;
            Command::Dijkstra(source, target)
        }
        Some("floyd-warshall") => Command::FloydWarshall,
        Some("johnson") => Command::Johnson,
        Some(other) => return Err(format!("unknown command {:?}", other)),
        None => return Err("missing command".to_string()),
    };

    Ok(Options { path, command, style })
}

fn run(options: Options) -> dense_paths::Result<()> {
    let graph = load_graph::<i64, _>(&options.path)?;
    let mut solver = ShortestPaths::new(graph);
    let style = options.style;

    match options.command {
        Command::Stats => {
            print!("{}", render_graph(solver.graph(), style));
            println!("connected = {}", solver.is_connected());
        }
        Command::Dijkstra(source, target) => {
            let query = solver.dijkstra(source, target)?;
            println!("{}", render_path(&query, style));
        }
        Command::FloydWarshall | Command::Johnson => {
            let status = match options.command {
                Command::Johnson => solver.johnson()?,
                _ => solver.floyd_warshall()?,
            };
            println!("status = {}", status);
            if status == ApspStatus::Ok {
                if let Some(distances) = solver.all_pairs() {
                    print!("{}", render_distance_matrix(distances, style));
                }
                match solver.shortest_shortest_path() {
                    Some(d) => println!("shortest shortest path = {}", d),
                    None => println!("shortest shortest path = none"),
                }
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {}\n\n{}", message, USAGE);
            process::exit(2);
        }
    };

    if let Err(e) = run(options) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
