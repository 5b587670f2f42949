pub mod peeking_take_while;
