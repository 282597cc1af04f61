use grid_transitions::PathMap;
use std::{env, fs, io};

// Prints every shortest path towards 'z' on a maze, then the single path from 'a'.
// The maze is read from the file given as first argument, or defaults to the bundled one:
//
//   cargo run --example maze [map.txt]

const MAZE: &str = include_str!("maze.txt");

fn main() -> io::Result<()> {
    let text = match env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => MAZE.to_owned(),
    };
    let map = PathMap::parse(&text);
    println!("Map:");
    print!("{}", map);

    let table = map.transitions_to('z');
    println!();
    println!("All paths:");
    print!("{}", map.render_all_paths(&table, 'a'));
    println!();
    println!("Path from a -> z:");
    print!("{}", map.render_path(&table, 'a'));
    Ok(())
}
