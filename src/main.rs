use std::io::{self, BufRead, Write};

use clap::Parser;
use robo_servo::config::{ANGLE_MAX, ANGLE_MIN, SERVO_DEFAULT_PIN};
use robo_servo::{ClampedServo, PwmServoDriver};

/// Bench tool: drive one servo from the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// GPIO pin the servo signal wire is connected to
    #[arg(short, long, default_value_t = SERVO_DEFAULT_PIN)]
    pin: u8,
    /// Lowest angle the servo may be commanded to (degrees)
    #[arg(long, default_value_t = ANGLE_MIN, allow_negative_numbers = true)]
    min: i32,
    /// Highest angle the servo may be commanded to (degrees)
    #[arg(long, default_value_t = ANGLE_MAX, allow_negative_numbers = true)]
    max: i32,
}

// Usage:
//  robo-servo --pin 18 --min 30 --max 150
//  Enter angle: 200   → servo moves to 150 (clamped)
//  Enter angle: q     → quit
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Args { pin, min, max } = Args::parse();

    let mut servo = ClampedServo::new(pin, PwmServoDriver::new()?)?;
    servo.set_min(min);
    servo.set_max(max);

    servo.attach()?;
    println!("✓ Servo attached on GPIO {}", servo.get_pin());
    println!("  Limits: {}", servo.get_limits());
    print_status(&servo)?;

    let stdin = io::stdin();
    loop {
        print!("Enter angle: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let input = line.trim();
        if input == "q" {
            println!("finished");
            break;
        }

        match input.parse::<i32>() {
            Ok(angle) => {
                servo.write(angle)?;
                print_status(&servo)?;
            }
            Err(_) => println!("⚠ Not an angle: {:?}", input),
        }
    }

    Ok(())
}

fn print_status(servo: &ClampedServo<PwmServoDriver>) -> Result<(), std::fmt::Error> {
    let mut status = String::new();
    servo.describe(&mut status)?;
    print!("{}", status);
    Ok(())
}
