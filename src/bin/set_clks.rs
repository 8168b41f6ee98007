use rfclk::{Board, RefFrequency};

const USAGE: &str = "\
usage: rfclk-set [--board NAME] [--bus N] [--clear-int] [FREQ_MHZ]
  --board NAME  board to program (ZCU111 or XUPRFSOC; default: $BOARD)
  --bus N       I2C bus of the SC18IS602B bridge (default: the board's)
  --clear-int   clear the bridge interrupt latch
  FREQ_MHZ      reference frequency to program, e.g. 409.6";

fn main() -> rfclk::Result<()> {
    env_logger::init();

    let mut board = None;
    let mut bus = None;
    let mut clear_int = false;
    let mut frequency = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                println!("{}", USAGE);
                return Ok(())
            }
            "--board" => {
                let name = args.next().unwrap_or_default();
                board = Some(Board::from_name(&name)
                    .ok_or(rfclk::Error::UnsupportedBoard(name))?);
            }
            "--bus" => {
                let number = args.next().unwrap_or_default();
                bus = Some(number.parse::<u32>().map_err(|_|
                    rfclk::Error::Other(format!("invalid bus number {:?}", number).into()))?);
            }
            "--clear-int" => clear_int = true,
            _ => {
                let mhz = arg.parse::<f64>().map_err(|_|
                    rfclk::Error::Other(format!("invalid frequency {:?}", arg).into()))?;
                frequency = Some(RefFrequency::from_mhz(mhz).ok_or_else(|| {
                    eprintln!("supported frequencies:");
                    for option in RefFrequency::ALL {
                        eprintln!("  {}", option);
                    }
                    rfclk::Error::UnsupportedFrequency(mhz)
                })?);
            }
        }
    }

    if frequency.is_none() && !clear_int {
        eprintln!("{}", USAGE);
        std::process::exit(1);
    }

    let board = match board {
        Some(board) => board,
        None => Board::from_env()?,
    };
    let mut device = match bus {
        Some(bus) => rfclk::Device::open(board, bus)?,
        None => rfclk::Device::new(board)?,
    };

    if clear_int {
        device.clear_interrupt()?;
    }
    if let Some(frequency) = frequency {
        device.set_ref_clks(frequency)?;
        println!("reference clocks on {} set to {}", board, frequency);
    }
    Ok(())
}
