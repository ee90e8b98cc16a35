mod tables;

pub use self::tables::best_times as print_best_times;
