#![allow(dead_code)]
#![allow(clippy::too_many_arguments)]
use alloy::sol;

sol!(
    #[sol(rpc)]
    contract CappedToken {
        constructor(string name, string symbol, uint256 initialSupply, address initialOwner);

        function name() external view returns (string name);
        function symbol() external view returns (string symbol);
        function decimals() external view returns (uint8 decimals);
        function totalSupply() external view returns (uint256 totalSupply);
        function balanceOf(address account) external view returns (uint256 balance);
        function transfer(address recipient, uint256 amount) external returns (bool);
        function allowance(address owner, address spender) external view returns (uint256 allowance);
        function approve(address spender, uint256 amount) external returns (bool);
        function transferFrom(address sender, address recipient, uint256 amount) external returns (bool);

        function mint(address to, uint256 amount) external;
        function burn(uint256 amount) external;
        function burnFrom(address account, uint256 amount) external;
        function getTokenInfo() external view returns (string name, string symbol, uint8 decimals, uint256 totalSupply, uint256 maxSupply);
        function MAX_SUPPLY() external view returns (uint256 maxSupply);

        function owner() external view returns (address owner);
        function transferOwnership(address newOwner) external;
        function renounceOwnership() external;

        function permit(address owner, address spender, uint256 value, uint256 deadline, uint8 v, bytes32 r, bytes32 s) external;
        function nonces(address owner) external view returns (uint256 nonce);
        function DOMAIN_SEPARATOR() external view returns (bytes32 domainSeparator);

        error SupplyCapExceeded(uint256 increased_supply, uint256 cap);
        error OwnableUnauthorizedAccount(address account);
        error OwnableInvalidOwner(address owner);
        error ERC20InsufficientBalance(address sender, uint256 balance, uint256 needed);
        error ERC20InvalidSender(address sender);
        error ERC20InvalidReceiver(address receiver);
        error ERC20InsufficientAllowance(address spender, uint256 allowance, uint256 needed);
        error ERC20InvalidSpender(address spender);
        error ERC2612ExpiredSignature(uint256 deadline);
        error ERC2612InvalidSigner(address signer, address owner);

        #[derive(Debug, PartialEq)]
        event Transfer(address indexed from, address indexed to, uint256 value);
        #[derive(Debug, PartialEq)]
        event Approval(address indexed owner, address indexed spender, uint256 value);
        #[derive(Debug, PartialEq)]
        event TokensMinted(address indexed to, uint256 amount);
        #[derive(Debug, PartialEq)]
        event TokensBurned(address indexed from, uint256 amount);
        #[derive(Debug, PartialEq)]
        event OwnershipTransferred(address indexed previousOwner, address indexed newOwner);
    }
);
